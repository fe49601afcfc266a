mod home;
pub use home::Home;

mod conditions;
pub use conditions::Conditions;

mod help_seeking;
pub use help_seeking::HelpSeeking;

mod flows;
pub use flows::Flows;
