//! CLI command implementations

mod config_gen;
mod helpers;
mod list;
mod login;
mod shorten;
mod show;
mod token;

pub use config_gen::config_generate;
pub use helpers::save_qr;
pub use list::list_links;
pub use login::login;
pub use shorten::shorten_link;
pub use show::show_link;
pub use token::show_token;
