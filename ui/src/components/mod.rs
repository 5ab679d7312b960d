pub mod disclosure;
pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;
pub mod links;

pub use footer::Footer;
pub use header::Header;
