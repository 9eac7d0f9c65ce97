//! UI Components
//!
//! Leptos components mapping the chart view model to DOM.

mod app_header;
mod desktop_tree;
mod loading_overlay;
mod member_card;
mod mobile_list;
mod org_chart;
mod toast;

pub use app_header::AppHeader;
pub use desktop_tree::DesktopTree;
pub use loading_overlay::LoadingOverlay;
pub use member_card::{DesktopMemberItem, MobileMemberRow};
pub use mobile_list::MobileList;
pub use org_chart::OrgChartView;
pub use toast::Toast;
