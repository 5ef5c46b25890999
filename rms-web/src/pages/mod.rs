mod about;
mod error;
mod home;
mod login;
mod master_data;
mod requests;
mod stickers;

pub use about::AboutPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use master_data::MasterDataPage;
pub use requests::RequestsPage;
pub use stickers::StickersPage;
