//! Skill proficiency data and the radar chart option built from it.

use serde_json::{json, Value};

/// DOM id of the chart mount element.
pub const CHART_MOUNT_ID: &str = "skills-chart";

/// Every axis of the radar chart tops out at this score.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub score: u8,
}

const fn skill(label: &'static str, score: u8) -> Skill {
    Skill { label, score }
}

/// Proficiency vector, in axis order.
pub const SKILLS: [Skill; 8] = [
    skill("Python", 90),
    skill("Machine Learning", 85),
    skill("Data Analysis", 80),
    skill("Java", 75),
    skill("Flutter/Dart", 70),
    skill("SQL/Database", 65),
    skill("Data Visualization", 75),
    skill("Problem Solving", 95),
];

/// ECharts option object for the skills radar.
pub fn radar_option(skills: &[Skill]) -> Value {
    let indicator: Vec<Value> = skills
        .iter()
        .map(|s| json!({ "name": s.label, "max": MAX_SCORE }))
        .collect();
    let values: Vec<u8> = skills.iter().map(|s| s.score.min(MAX_SCORE)).collect();

    json!({
        "backgroundColor": "transparent",
        "title": {
            "text": "Technical Skills Proficiency",
            "left": "center",
            "textStyle": { "color": "#ffffff", "fontSize": 18, "fontWeight": "bold" }
        },
        "tooltip": {
            "trigger": "item",
            "backgroundColor": "rgba(26, 31, 54, 0.9)",
            "borderColor": "#4a9b8e",
            "textStyle": { "color": "#ffffff" }
        },
        "radar": {
            "indicator": indicator,
            "shape": "polygon",
            "splitNumber": 4,
            "axisName": { "color": "#ffffff", "fontSize": 12 },
            "splitLine": { "lineStyle": { "color": "rgba(255, 255, 255, 0.2)" } },
            "splitArea": { "show": false },
            "axisLine": { "lineStyle": { "color": "rgba(255, 255, 255, 0.3)" } }
        },
        "series": [{
            "name": "Skills",
            "type": "radar",
            "data": [{
                "value": values,
                "name": "Current Level",
                "areaStyle": { "color": "rgba(74, 155, 142, 0.3)" },
                "lineStyle": { "color": "#4a9b8e", "width": 2 },
                "itemStyle": { "color": "#ff6b6b", "borderColor": "#ffffff", "borderWidth": 2 }
            }],
            "animationDuration": 2000,
            "animationEasing": "cubicOut"
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_has_one_axis_per_skill() {
        let option = radar_option(&SKILLS);
        let axes = option["radar"]["indicator"].as_array().unwrap();
        assert_eq!(axes.len(), 8);
        assert_eq!(axes[7]["name"], "Problem Solving");
        assert_eq!(axes[0]["max"], 100);
    }

    #[test]
    fn series_values_follow_axis_order() {
        let option = radar_option(&SKILLS);
        let values = &option["series"][0]["data"][0]["value"];
        assert_eq!(values, &json!([90, 85, 80, 75, 70, 65, 75, 95]));
    }
}
