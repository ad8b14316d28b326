//! Chart preparation: currency scaling, visibility filtering, tooltips, colors
//! and layout of the stacked min/max bars.

mod layout;
mod palette;
mod state;
mod tooltip;
mod transform;
mod visibility;

pub use layout::{
    CategoryRow, ChartModel, CompanyStack, LegendEntry, RenderOptions, Segment, Tick, axis_label,
    build_chart, nice_ticks, stack_segments,
};
pub use palette::{MAX_OPACITY, MIN_OPACITY, PALETTE, color_for_index, company_color};
pub use state::{DashboardAction, DashboardState, Notification};
pub use tooltip::{Tooltip, tooltip_for};
pub use transform::{Bound, ChartRecord, MAX_SUFFIX, MIN_SUFFIX, field_name, split_field, transform};
pub use visibility::{CountryFilter, VisibilityAction, VisibilityMap, visible_companies};
