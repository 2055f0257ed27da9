//! Stateless HTML panels around rendered content.

use ecoguard_client::{
    AlertLevel, AlertResponse, Category, EnvironmentalData, MonitoringData,
};

use crate::html::html_escape;
use crate::markup::Markup;

/// Styling for one report section panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionScheme {
    pub container: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

const SECTION_SCHEMES: [SectionScheme; 4] = [
    SectionScheme {
        container: "bg-blue-50 border-blue-200",
        title: "text-blue-800 bg-blue-100",
        icon: "\u{1F4A7}",
    },
    SectionScheme {
        container: "bg-green-50 border-green-200",
        title: "text-green-800 bg-green-100",
        icon: "\u{1F33F}",
    },
    SectionScheme {
        container: "bg-purple-50 border-purple-200",
        title: "text-purple-800 bg-purple-100",
        icon: "\u{1F52C}",
    },
    SectionScheme {
        container: "bg-amber-50 border-amber-200",
        title: "text-amber-800 bg-amber-100",
        icon: "\u{1F50D}",
    },
];

/// Schemes rotate by section position.
pub fn section_scheme(index: usize) -> SectionScheme {
    SECTION_SCHEMES[index % SECTION_SCHEMES.len()]
}

/// Wrap one rendered report section in its titled panel.
pub fn report_section_panel(title: &str, body: &Markup, index: usize) -> Markup {
    let scheme = section_scheme(index);
    Markup::from_rendered(format!(
        r#"<div class="mb-6 border rounded-lg overflow-hidden shadow-sm {container}">
    <div class="flex items-center px-4 py-3 {title_class}"><span class="text-xl mr-2">{icon}</span><h5 class="font-semibold">{title}</h5></div>
    <div class="p-4 prose prose-sm max-w-none"><div class="text-gray-800">{body}</div></div>
</div>"#,
        container = scheme.container,
        title_class = scheme.title,
        icon = scheme.icon,
        title = html_escape(title),
        body = body,
    ))
}

fn banner_style(level: AlertLevel) -> (&'static str, &'static str, &'static str, &'static str) {
    match level {
        AlertLevel::Success => ("bg-green-50", "text-green-800", "border-green-300", "\u{2705}"),
        AlertLevel::Error => ("bg-red-50", "text-red-800", "border-red-300", "\u{274C}"),
        AlertLevel::Warning => (
            "bg-yellow-50",
            "text-yellow-800",
            "border-yellow-300",
            "\u{26A0}\u{FE0F}",
        ),
        AlertLevel::Info => ("bg-blue-50", "text-blue-800", "border-blue-300", "\u{2139}\u{FE0F}"),
    }
}

/// Inline banner for an alert or a view's error slot.
pub fn alert_banner(level: AlertLevel, title: &str, message: &str, dismissible: bool) -> Markup {
    let (bg, text, border, icon) = banner_style(level);
    let close = if dismissible {
        r#"<button class="text-gray-400 hover:text-gray-600">&#10006;</button>"#
    } else {
        ""
    };
    Markup::from_rendered(format!(
        r#"<div class="flex items-center gap-4 p-4 mb-4 rounded-lg border {bg} {border}"><span class="text-2xl {text}">{icon}</span><div class="flex-grow"><p class="font-bold {text}">{title}</p><p class="text-sm {text}">{message}</p></div>{close}</div>"#,
        title = html_escape(title),
        message = html_escape(message),
    ))
}

pub fn aqi_color_class(aqi: u32) -> &'static str {
    match aqi {
        1 => "bg-green-500",
        2 => "bg-green-300",
        3 => "bg-yellow-300",
        4 => "bg-orange-400",
        5 => "bg-red-500",
        _ => "bg-gray-300",
    }
}

pub fn category_color_class(category: Category) -> &'static str {
    match category {
        Category::AirQuality => "text-blue-600 border-blue-600",
        Category::WaterQuality => "text-teal-600 border-teal-600",
        Category::Pollution => "text-purple-600 border-purple-600",
    }
}

/// Current conditions card for the snapshot view.
pub fn snapshot_panel(data: &EnvironmentalData) -> Markup {
    let aq = &data.air_quality;
    let w = &data.weather_conditions;
    Markup::from_rendered(format!(
        r#"<div class="border rounded-lg p-4 mb-6">
    <h3 class="text-xl font-semibold">{city}, {country}</h3>
    <div class="flex items-center gap-2 my-2"><span class="inline-block w-4 h-4 rounded-full {aqi_class}"></span><span>AQI {aqi}: {level}</span></div>
    <p class="text-sm">{description}</p>
    <div class="flex items-center gap-2 mt-3"><img src="{icon}" alt="Weather icon" class="w-12 h-12"><span>{temp:.1}&deg;C, {weather}</span></div>
    <p class="text-sm">Humidity {humidity:.0}% &middot; Wind {wind:.1} m/s &middot; Pressure {pressure:.0} hPa</p>
</div>"#,
        city = html_escape(&data.location.city),
        country = html_escape(&data.location.country),
        aqi_class = aqi_color_class(aq.aqi),
        aqi = aq.aqi,
        level = html_escape(&aq.quality_level),
        description = html_escape(&aq.description),
        icon = html_escape(&w.icon_url()),
        temp = w.temperature,
        weather = html_escape(&w.weather_description),
        humidity = w.humidity,
        wind = w.wind_speed,
        pressure = w.pressure,
    ))
}

/// Key readings for the selected monitoring category.
pub fn monitoring_panel(category: Category, data: &MonitoringData) -> Markup {
    let mut rows: Vec<(&str, String)> = Vec::new();
    if let Some(aq) = &data.air_quality {
        rows.push(("AQI", format!("{} ({})", aq.aqi, aq.quality_level)));
        rows.push(("PM2.5", format!("{:.1} µg/m³", aq.pollutants.pm2_5)));
        rows.push(("PM10", format!("{:.1} µg/m³", aq.pollutants.pm10)));
        rows.push(("NO₂", format!("{:.1} µg/m³", aq.pollutants.no2)));
        rows.push(("O₃", format!("{:.1} µg/m³", aq.pollutants.o3)));
    }
    if let Some(wq) = &data.water_quality {
        rows.push(("Overall index", format!("{:.0}", wq.overall_index)));
        rows.push(("pH", format!("{:.1}", wq.ph_level)));
        rows.push(("Turbidity", format!("{:.1} NTU", wq.turbidity)));
        rows.push(("Dissolved oxygen", format!("{:.1} mg/L", wq.dissolved_oxygen)));
        rows.push(("E. coli", wq.e_coli_presence.clone()));
    }
    if let Some(p) = &data.pollution {
        rows.push(("Overall index", format!("{:.0}", p.overall_index)));
        rows.push(("Noise", format!("{:.0} dB", p.noise_pollution)));
        rows.push(("Light", format!("{:.0}", p.light_pollution)));
        rows.push(("Waste management", format!("{:.0}", p.waste_management_index)));
        rows.push(("Radiation", p.radiation_levels.clone()));
        rows.push(("Soil", p.soil_pollution.clone()));
    }

    let mut table = String::new();
    for (label, value) in &rows {
        table.push_str(&format!(
            r#"<tr><th class="text-left pr-4">{}</th><td>{}</td></tr>"#,
            html_escape(label),
            html_escape(value)
        ));
    }

    Markup::from_rendered(format!(
        r#"<div class="border-b-2 {color} mb-4"><h3 class="text-xl font-semibold">{label}</h3><table class="text-sm my-2">{table}</table></div>"#,
        color = category_color_class(category),
        label = category.label(),
    ))
}

/// Alert banners for an alerts response, or a placeholder when empty.
pub fn alerts_panel(response: &AlertResponse) -> Markup {
    if response.alerts.is_empty() {
        return Markup::from_rendered(
            r#"<p class="text-gray-500">No active alerts for this location.</p>"#.to_string(),
        );
    }
    let mut out = String::new();
    for alert in &response.alerts {
        out.push_str(alert_banner(alert.level, &alert.title, &alert.message, false).as_str());
    }
    Markup::from_rendered(out)
}

/// Standalone HTML document.
pub fn build_page(title: &str, body: &Markup) -> Markup {
    Markup::from_rendered(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="text-gray-900 font-sans">
<main class="max-w-4xl mx-auto p-6">
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
    ))
}
