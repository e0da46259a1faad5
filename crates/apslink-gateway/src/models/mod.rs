pub mod access_group;
pub mod card;
pub mod event;
pub mod folder;
pub mod holiday;
pub mod person;
pub mod schedule;
pub mod system;

pub use access_group::{AccessGroup, PersonAccessGroup};
pub use card::Card;
pub use event::Event;
pub use folder::Folder;
pub use holiday::Holiday;
pub use person::Person;
pub use schedule::Schedule;
pub use system::{Module, System};
