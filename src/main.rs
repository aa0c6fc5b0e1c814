use std::fs::File;
use tile_canvas::core::config;
use tile_canvas::{
    CairoCanvas, CairoGraphicFactory, CairoPaint, Canvas, Cap, FontFamily, FontStyle, Matrix,
    Path, Style,
};

struct Args {
    out: String,
    size: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        out: config::DEMO_OUTPUT.to_string(),
        size: config::DEMO_TILE_SIZE,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--out" if i + 1 < argv.len() => {
                i += 1;
                args.out = argv[i].clone();
            }
            "--size" if i + 1 < argv.len() => {
                i += 1;
                match argv[i].parse() {
                    Ok(size) => args.size = size,
                    Err(_) => log::warn!("Ignoring invalid --size {:?}", argv[i]),
                }
            }
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    args
}

fn stroke(color: u32, width: f32, cap: Cap) -> CairoPaint {
    let mut paint = CairoPaint::new();
    paint.set_color(color);
    paint.set_style(Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(cap);
    paint
}

fn fill(color: u32) -> CairoPaint {
    let mut paint = CairoPaint::new();
    paint.set_color(color);
    paint.set_style(Style::Fill);
    paint
}

/// Draw a small synthetic map tile: water, a road with casing, a POI and labels.
fn render_tile(
    factory: &CairoGraphicFactory,
    canvas: &mut CairoCanvas,
    size: i32,
) -> tile_canvas::Result<()> {
    canvas.fill_color(config::LAND_COLOR)?;

    // Lake
    let mut lake = factory.create_path();
    lake.move_to(0, size * 3 / 5);
    lake.line_to(size * 2 / 5, size / 2);
    lake.line_to(size / 2, size);
    lake.line_to(0, size);
    canvas.draw_path(&lake, &fill(config::WATER_COLOR))?;

    // Road: casing under fill
    let mut road = factory.create_path();
    road.move_to(size / 8, size / 8);
    road.line_to(size / 2, size / 3);
    road.line_to(size * 7 / 8, size / 4);
    canvas.draw_path(&road, &stroke(config::ROAD_CASING, 9.0, Cap::Round))?;
    canvas.draw_path(&road, &stroke(config::ROAD_FILL, 6.0, Cap::Round))?;

    // Point of interest with a marker bitmap
    let marker = factory.create_bitmap_from_rgba(4, 4, &[233, 69, 96, 255].repeat(16))?;
    let mut matrix = factory.create_matrix();
    matrix.translate(f64::from(size * 3 / 4), f64::from(size * 2 / 3));
    matrix.rotate_about(std::f64::consts::FRAC_PI_4, 2.0, 2.0);
    canvas.draw_bitmap_matrix(&marker, &matrix)?;
    let ring = stroke(config::POI_COLOR, 2.0, Cap::Butt);
    canvas.draw_circle(size * 3 / 4 - 6, size * 2 / 3 - 6, 16, &ring)?;

    // Labels
    let mut label = fill(config::LABEL_COLOR);
    label.set_typeface(FontFamily::SansSerif, FontStyle::Bold);
    label.set_text_size(11.0);
    let (x1, y1, x2, y2) = (size / 8, size / 8, size / 2, size / 3);
    canvas.draw_text_rotated("Main Street", x1, y1, x2, y2, &label)?;
    canvas.draw_text("Lake", size / 10, size * 9 / 10, &label)?;

    Ok(())
}

fn run(args: &Args) -> tile_canvas::Result<()> {
    let factory = CairoGraphicFactory::new();
    let mut canvas = factory.create_canvas();
    canvas.set_bitmap(Some(factory.create_bitmap(args.size, args.size)?))?;

    render_tile(&factory, &mut canvas, args.size)?;

    if let Some(bitmap) = canvas.set_bitmap(None)? {
        let mut file = File::create(&args.out).map_err(cairo::IoError::Io)?;
        bitmap.write_png(&mut file)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = parse_args();
    if args.size <= 0 {
        eprintln!("Usage: tile-canvas-demo [--out <file.png>] [--size <pixels>]");
        std::process::exit(1);
    }

    match run(&args) {
        Ok(()) => log::info!("Wrote {}x{} tile to {}", args.size, args.size, args.out),
        Err(e) => {
            eprintln!("Failed to render tile: {}", e);
            std::process::exit(1);
        }
    }
}
