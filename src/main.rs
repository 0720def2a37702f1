// This file is an example of how a front end drives the `sheet_options` library.
// A real front end would take these (name, value) pairs from its argument parser.

use sheet_options::parsers::{
    parse_border, parse_color, parse_delta, parse_direction, parse_rectangle_size,
    parse_scan_step, parse_wipe,
};
use sheet_options::{OptionResult, Options};

const SAMPLE_OPTIONS: &[(&str, &str)] = &[
    ("--sheet-size", "2480,3508"),
    ("--pre-shift", "-10"),
    ("--border", "5,5,5,5"),
    ("--sheet-background", "white"),
    ("--mask-scan-direction", "vh"),
    ("--mask-scan-step", "5"),
    ("--wipe", "0,0,200,100"),
    ("--wipe", "0,0,0,0"),
];

fn apply(options: &mut Options, name: &str, value: &str) -> OptionResult<()> {
    match name {
        "--sheet-size" => options.sheet_size = Some(parse_rectangle_size(value)?),
        "--pre-shift" => options.pre_shift = parse_delta(value)?,
        "--border" => options.border = parse_border(value)?,
        "--sheet-background" => options.sheet_background = parse_color(value)?,
        "--mask-scan-direction" => options.mask_scan_direction = parse_direction(value)?,
        "--mask-scan-step" => options.mask_scan_step = Some(parse_scan_step(value)?),
        "--wipe" => parse_wipe(name, value, &mut options.wipes)?,
        _ => tracing::warn!(option = name, "unknown option"),
    }
    Ok(())
}

fn main() {
    sheet_options::init_tracing();
    println!("Sheet Options - Example Runner");

    let mut options = Options::new();
    for (name, value) in SAMPLE_OPTIONS {
        if let Err(err) = apply(&mut options, name, value) {
            eprintln!("{name}: {err}");
        }
    }

    if let Some(size) = options.sheet_size {
        println!("sheet size:          {size}");
    }
    println!("pre shift:           {}", options.pre_shift);
    println!("border:              {}", options.border);
    println!("sheet background:    {}", options.sheet_background);
    println!("mask scan direction: {}", options.mask_scan_direction);
    if let Some(step) = options.mask_scan_step {
        println!("mask scan step:      {step}");
    }
    for area in &options.wipes {
        println!("wipe:                {area}");
    }
    println!("sheets:              {}", options.sheet_multi_index);
}
