//! Server-side HTML rendering of the claim form and risk report
//!
//! Charts are drawn as inline SVG so the page needs no client-side script.

use std::f64::consts::PI;
use std::fmt::Write;

use domain_claims::{AnalysisRow, ClaimType};

use crate::dto::risk::{ClaimForm, Gauge, PieChart, RiskReport};

const STYLE: &str = r#"
body { background-color: #121212; color: #e0e0e0; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; }
main { display: flex; gap: 2rem; padding: 2rem; }
aside { background-color: #181818; padding: 1rem; border-radius: 8px; min-width: 16rem; }
.content { flex: 1; }
.hero { background: linear-gradient(90deg, #6200ea 0%, #3700b3 100%); padding: 2rem 0; border-radius: 8px; text-align: center; margin-bottom: 2rem; }
.hero h1, .hero p { color: #fff; margin: 0; }
.sub-header { font-size: 1.25rem; color: #bbb; }
form .grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
label { display: block; font-weight: 600; font-size: 1.1rem; color: #fff; margin-bottom: 0.25rem; }
input, select { width: 100%; color: #e0e0e0; background-color: #1e1e1e; border: 1px solid #333; padding: 0.4rem; }
button { color: #fff; background-color: #6200ea; border: none; border-radius: 5px; padding: 0.65rem 1.2rem; margin-top: 1rem; box-shadow: 0 2px 4px rgba(0,0,0,0.2); }
.metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin: 1.5rem 0; }
.metric { background-color: #333; border-radius: 6px; padding: 0.5rem 1rem; color: #fff; }
.metric .value { font-size: 1.8rem; }
.risk-card { background-color: #1e1e1e; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 6px rgba(0,0,0,0.5); margin-bottom: 1rem; }
.banner-success { border-left: 6px solid #21c354; }
.banner-warning { border-left: 6px solid #ffbd45; }
.banner-error { border-left: 6px solid #ff4b4b; }
.progress { background: #333; border-radius: 4px; height: 0.6rem; }
.progress div { background: #6200ea; height: 100%; border-radius: 4px; }
.error { background: #3b1d1d; color: #ff8a8a; padding: 0.75rem 1rem; border-radius: 6px; margin-top: 1rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #333; padding: 0.3rem 0.6rem; }
"#;

/// Escapes text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the full page: form, optional error, optional report
pub fn render_page(form: &ClaimForm, report: Option<&RiskReport>, error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&render_form(form));

    if let Some(message) = error {
        let _ = write!(body, r#"<div class="error">{}</div>"#, escape_html(message));
    }
    if let Some(report) = report {
        body.push_str(&render_report(report));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ClaimWatch</title>
<style>{style}</style>
</head>
<body>
<main>
<aside>
<h2>ℹ️ About ClaimWatch</h2>
<ul>
<li><strong>ClaimWatch</strong> estimates how likely an insurance claim is to be fraudulent.</li>
<li>Enter the claim details and click <strong>Predict Fraud Risk</strong>.</li>
<li>Scores come from fixed rules, not a trained model.</li>
</ul>
<hr>
<p><em>💡 Tip: Try different values to see how the risk changes.</em></p>
</aside>
<div class="content">
<div class="hero"><h1>🚨 ClaimWatch</h1><p>Fraud Detection System</p></div>
<p class="sub-header">Smart Insurance Claim Risk Analyzer</p>
<p>Enter claim details below to predict fraud risk.</p>
{body}
</div>
</main>
</body>
</html>
"#,
        style = STYLE,
        body = body,
    )
}

fn number_field(name: &str, label: &str, value: &str, min: u32, max: Option<u32>, step: u32) -> String {
    let max_attr = max.map(|m| format!(r#" max="{}""#, m)).unwrap_or_default();
    format!(
        r#"<div><label for="{name}">{label}</label><input type="number" id="{name}" name="{name}" value="{value}" min="{min}"{max_attr} step="{step}"></div>"#,
        name = name,
        label = label,
        value = escape_html(value),
        min = min,
        max_attr = max_attr,
        step = step,
    )
}

fn render_form(form: &ClaimForm) -> String {
    let mut options = String::new();
    for claim_type in ClaimType::ALL {
        let selected = if form.claim_type.trim().eq_ignore_ascii_case(claim_type.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            r#"<option value="{v}"{selected}>{v}</option>"#,
            v = claim_type.as_str(),
            selected = selected
        );
    }

    format!(
        r#"<form method="post" action="/">
<div class="grid">
{amount}
{prev}
{duration}
{age}
{days}
<div><label for="claim_type">Claim Type</label><select id="claim_type" name="claim_type">{options}</select></div>
</div>
<button type="submit">Predict Fraud Risk</button>
</form>"#,
        amount = number_field("claim_amount", "Claim Amount", &form.claim_amount, 0, None, 1000),
        age = number_field("customer_age", "Customer Age", &form.customer_age, 18, Some(100), 1),
        prev = number_field("num_previous_claims", "Number of Previous Claims", &form.num_previous_claims, 0, None, 1),
        days = number_field("days_since_last_claim", "Days Since Last Claim", &form.days_since_last_claim, 0, None, 1),
        duration = number_field("policy_duration", "Policy Duration (Years)", &form.policy_duration, 0, None, 1),
        options = options,
    )
}

/// Renders the results section of the page
pub fn render_report(report: &RiskReport) -> String {
    let mut html = String::from(r#"<section class="results"><div class="metrics">"#);
    for metric in &report.summary {
        let delta = metric
            .delta
            .as_deref()
            .map(|d| format!(r#"<div class="delta">{}</div>"#, escape_html(d)))
            .unwrap_or_default();
        let _ = write!(
            html,
            r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div>{}</div>"#,
            escape_html(&metric.label),
            escape_html(&metric.value),
            delta
        );
    }
    html.push_str("</div>");

    html.push_str(&pie_svg(&report.breakdown));
    html.push_str(&gauge_svg(&report.gauge));

    let banner = &report.banner;
    let _ = write!(
        html,
        r#"<div class="risk-card {class}"><h2>{icon} {label}</h2><h3>{message}</h3></div><div class="progress"><div style="width: {pct}%"></div></div>"#,
        class = banner.style.css_class(),
        icon = banner.icon,
        label = banner.label,
        message = escape_html(&banner.message),
        pct = report.result.probability,
    );

    html.push_str("<hr>");
    html.push_str(&analysis_table(&report.analysis_row));
    html.push_str("</section>");
    html
}

fn analysis_table(row: &AnalysisRow) -> String {
    let header: String = AnalysisRow::COLUMNS
        .iter()
        .map(|c| format!("<th>{}</th>", c))
        .collect();
    let cells: String = row
        .values()
        .iter()
        .map(|v| format!("<td>{}</td>", v))
        .collect();

    format!(
        "<details><summary>📊 Claim Data Used for Analysis</summary><table><tr>{}</tr><tr>{}</tr></table></details>",
        header, cells
    )
}

const PIE_CX: f64 = 120.0;
const PIE_CY: f64 = 120.0;
const PIE_R: f64 = 100.0;

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Draws the factor breakdown as an SVG pie with a legend
pub fn pie_svg(chart: &PieChart) -> String {
    let mut svg = format!(
        r#"<figure class="chart"><figcaption>🔍 {}</figcaption><svg viewBox="0 0 420 240" width="420" height="240" role="img">"#,
        escape_html(&chart.title)
    );

    let mut start = -PI / 2.0;
    let drawn: Vec<_> = chart.slices.iter().filter(|s| s.share > 0.0).collect();
    if drawn.is_empty() {
        let _ = write!(
            svg,
            r##"<circle cx="{PIE_CX}" cy="{PIE_CY}" r="{PIE_R}" fill="#2a2a2a"/><text x="{PIE_CX}" y="{PIE_CY}" text-anchor="middle" fill="#bbb">No risk factors</text>"##
        );
    }
    for slice in &drawn {
        if slice.share >= 1.0 {
            let _ = write!(
                svg,
                r#"<circle cx="{PIE_CX}" cy="{PIE_CY}" r="{PIE_R}" fill="{}"/>"#,
                slice.color
            );
            continue;
        }
        let sweep = slice.share * 2.0 * PI;
        let end = start + sweep;
        let (x1, y1) = point_on_circle(PIE_CX, PIE_CY, PIE_R, start);
        let (x2, y2) = point_on_circle(PIE_CX, PIE_CY, PIE_R, end);
        let large_arc = if slice.share > 0.5 { 1 } else { 0 };
        let _ = write!(
            svg,
            r#"<path d="M {PIE_CX} {PIE_CY} L {x1:.2} {y1:.2} A {PIE_R} {PIE_R} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}"><title>{name}: {score}</title></path>"#,
            color = slice.color,
            name = escape_html(&slice.component),
            score = slice.score,
        );
        start = end;
    }

    for (i, slice) in chart.slices.iter().enumerate() {
        let y = 30 + i * 24;
        let _ = write!(
            svg,
            r##"<rect x="250" y="{ry}" width="14" height="14" fill="{color}"/><text x="272" y="{ty}" fill="#e0e0e0">{name} ({pct:.1}%)</text>"##,
            ry = y,
            ty = y + 12,
            color = slice.color,
            name = escape_html(&slice.component),
            pct = slice.share * 100.0,
        );
    }

    svg.push_str("</svg></figure>");
    svg
}

/// Draws the probability as a semicircular SVG gauge
pub fn gauge_svg(gauge: &Gauge) -> String {
    let (cx, cy, r) = (120.0, 130.0, 100.0);
    let span = f64::from(gauge.max.saturating_sub(gauge.min)).max(1.0);
    let fraction = (f64::from(gauge.value.saturating_sub(gauge.min)) / span).clamp(0.0, 1.0);

    let mut svg = format!(
        r##"<figure class="chart"><figcaption>{title}</figcaption><svg viewBox="0 0 240 160" width="240" height="160" role="img"><path d="M {x0} {cy} A {r} {r} 0 0 1 {x1} {cy}" stroke="#333" stroke-width="20" fill="none"/>"##,
        title = escape_html(&gauge.title),
        x0 = cx - r,
        x1 = cx + r,
        cy = cy,
        r = r,
    );

    if fraction > 0.0 {
        let angle = PI + fraction * PI;
        let (x, y) = point_on_circle(cx, cy, r, angle);
        let _ = write!(
            svg,
            r#"<path d="M {x0} {cy} A {r} {r} 0 0 1 {x:.2} {y:.2}" stroke="{color}" stroke-width="20" fill="none"/>"#,
            x0 = cx - r,
            cy = cy,
            r = r,
            color = gauge.bar_color,
        );
    }

    let _ = write!(
        svg,
        r##"<text x="{cx}" y="{ty}" text-anchor="middle" font-size="28" fill="#fff">{value}</text><text x="{x0}" y="150" text-anchor="middle" fill="#bbb">{min}</text><text x="{x1}" y="150" text-anchor="middle" fill="#bbb">{max}</text></svg></figure>"##,
        cx = cx,
        ty = cy - 10.0,
        value = gauge.value,
        x0 = cx - r,
        x1 = cx + r,
        min = gauge.min,
        max = gauge.max,
    );
    svg
}
