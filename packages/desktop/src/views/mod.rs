pub use ui::views::HomeView as Home;
pub use ui::views::LoginView as Login;
pub use ui::views::NotFoundView as NotFound;
pub use ui::views::ProfileView as Profile;
