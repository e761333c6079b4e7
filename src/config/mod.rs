//! Configuration module

mod site;

pub use site::SiteConfig;
pub use site::{BlogConfig, FeedOptions, HeadTag, I18nConfig, LinkPolicy, SidebarCount};
pub use site::{FooterConfig, NavItem, NavPosition, NavbarConfig, PrismConfig, ThemeConfig};
