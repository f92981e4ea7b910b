//! Mount point for the skills radar chart.

use dioxus::prelude::*;
use folio_core::skills::CHART_MOUNT_ID;

#[derive(Props, Clone, PartialEq)]
pub struct SkillsChartProps {
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// An empty container ECharts renders into.
#[component]
pub fn SkillsChart(props: SkillsChartProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            id: CHART_MOUNT_ID,
            style: "{style}",
        }
    }
}
