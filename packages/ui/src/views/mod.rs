mod login;
pub use login::LoginView;

mod home;
pub use home::HomeView;

mod profile;
pub use profile::ProfileView;

mod not_found;
pub use not_found::NotFoundView;
