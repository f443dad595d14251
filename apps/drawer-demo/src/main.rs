mod script;
mod surface;

use anyhow::{bail, Result};
use drawer_core::prelude::*;
use script::{run, stroke, Script, Step};
use surface::DemoSurface;

const VIEWPORT: Size = Size::new(390.0, 844.0);
const SCENARIOS: &[&str] = &["side-flick", "sheet-expand", "sheet-dock", "wheel"];

fn scenario(name: &str) -> Option<Script> {
    let script = match name {
        "side-flick" => {
            let mut steps = vec![
                Step::Open,
                Step::Press(300.0, 400.0),
                Step::Move(330.0, 400.0, 16.0),
                Step::Cancel,
            ];
            steps.extend(stroke((300.0, 400.0), (340.0, 400.0), 4, 40.0));
            steps.push(Step::TransitionEnd);
            Script {
                name: "side-flick",
                config: DrawerConfig::new(Side::Right),
                surface: DemoSurface::new(Side::Right, VIEWPORT, 320.0),
                steps,
            }
        }
        "sheet-expand" => {
            let mut steps = vec![Step::Open];
            steps.extend(stroke((195.0, 600.0), (195.0, 200.0), 10, 500.0));
            steps.extend(stroke((195.0, 100.0), (195.0, 420.0), 16, 1600.0));
            Script {
                name: "sheet-expand",
                config: DrawerConfig::new(Side::Bottom)
                    .with_size(SizeToken::M)
                    .with_expand_to_full(true)
                    .with_max_expanded_height("calc(100% - 32px)"),
                surface: DemoSurface::new(Side::Bottom, VIEWPORT, 548.0),
                steps,
            }
        }
        "sheet-dock" => {
            let mut steps = vec![Step::Open];
            steps.extend(stroke((195.0, 400.0), (195.0, 760.0), 12, 480.0));
            steps.extend(stroke((195.0, 815.0), (195.0, 760.0), 5, 200.0));
            steps.extend(stroke((195.0, 400.0), (195.0, 760.0), 12, 480.0));
            steps.push(Step::RequestClose);
            steps.push(Step::TransitionEnd);
            Script {
                name: "sheet-dock",
                config: DrawerConfig::new(Side::Bottom)
                    .with_size(SizeToken::M)
                    .with_expand_to_full(true)
                    .with_dock_header_on_close(true),
                surface: DemoSurface::new(Side::Bottom, VIEWPORT, 548.0).with_header(56.0),
                steps,
            }
        }
        "wheel" => Script {
            name: "wheel",
            config: DrawerConfig::new(Side::Bottom)
                .with_size(SizeToken::S)
                .with_expand_to_full(true)
                .with_max_expanded_height("90vh")
                .with_expand_with_wheel(true),
            surface: DemoSurface::new(Side::Bottom, VIEWPORT, 400.0)
                .with_body(ScrollMetrics::new(0.0, 1600.0, 360.0)),
            steps: vec![
                Step::Open,
                Step::Wheel(90.0),
                Step::Wheel(400.0),
                Step::Wheel(400.0),
                Step::Wheel(-60.0),
                Step::Wheel(-400.0),
            ],
        },
        _ => return None,
    };
    Some(script)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() || names.iter().any(|name| name == "all") {
        names = SCENARIOS.iter().map(|name| name.to_string()).collect();
    }

    let ids = IdScope::new("demo-drawer");
    let mut scripts = Vec::with_capacity(names.len());
    for name in &names {
        match scenario(name) {
            Some(script) => scripts.push(script),
            None => bail!("unknown scenario '{name}', expected one of {SCENARIOS:?}"),
        }
    }

    println!("=== Drawer gesture replay ===");
    for script in scripts {
        let report = run(script, &ids);
        println!(
            "{:<14} {:>3} events  phase={:<12} height={:>6.1}px  callbacks={:?}  ({:.2}ms)",
            report.name,
            report.events,
            format!("{:?}", report.final_phase),
            report.final_height,
            report.callbacks,
            report.elapsed_ms
        );
    }
    Ok(())
}
