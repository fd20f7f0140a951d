mod app_header;
mod sivec_icon;

pub use app_header::AppHeader;
pub use sivec_icon::SivecIcon;
