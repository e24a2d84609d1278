//! Page components for AetherLab.

mod about;
mod case_study;
mod contact;
mod home;
mod not_found;
mod resume;
mod work;

pub use about::About;
pub use case_study::CaseStudyView;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use resume::Resume;
pub use work::WorkIndex;
