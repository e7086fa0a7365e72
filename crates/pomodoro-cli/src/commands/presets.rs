use pomodoro_core::Preset;
use serde::Serialize;

#[derive(Serialize)]
struct PresetInfo {
    name: Preset,
    label: String,
    work_min: u32,
    break_min: u32,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let presets: Vec<PresetInfo> = Preset::ALL
        .iter()
        .map(|&p| PresetInfo {
            name: p,
            label: p.label(),
            work_min: p.work_min(),
            break_min: p.break_min(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&presets)?);
    Ok(())
}
