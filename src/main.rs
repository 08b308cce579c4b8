use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_text::{
    Direction, FixedAdvanceMeasurer, FontFace, Point, SelectionOptions, ShapingMeasurer,
    TextMeasurer, TextView, bidi::detect_direction, font::load_system_default_font,
};

const SAMPLE: &[&str] = &[
    "Hello line A.",
    "rtl:שלום עולם",
    "A longer paragraph that does not fit on a single line and has to wrap.",
];

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = RuneConfig::load();
    log::debug!("config: {config:?}");

    let measurer = build_measurer(&config)?;
    let options = SelectionOptions {
        empty_line_width: config.selection.empty_line_width,
    };
    let mut view = TextView::with_options(measurer, config.layout.page_width, options);
    view.set_selectable(config.selection.selectable);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLE.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    for input in inputs {
        let (text, direction) = match input.strip_prefix("rtl:") {
            Some(text) => (text, Direction::Rtl),
            None => (input, detect_direction(input)),
        };
        view.append(text, direction);
    }

    print_lines(&view);
    replay_drag(&mut view);
    Ok(())
}

/// Shaped measurement when a font path or size is configured, fixed
/// advances otherwise. A size without a path shapes with the system's
/// default sans-serif face.
fn build_measurer(config: &RuneConfig) -> Result<Box<dyn TextMeasurer>> {
    let font_size = config.text.font_size.unwrap_or(16.0);
    let line_padding = config.text.line_padding.unwrap_or(0.0);

    let font = match (&config.text.font, config.text.font_size) {
        (Some(path), _) => {
            log::info!("measuring with {}", path.display());
            FontFace::from_path(path, 0)
                .with_context(|| format!("failed to load font {}", path.display()))?
        }
        (None, Some(_)) => {
            log::info!("measuring with the system default font");
            load_system_default_font().context("failed to load a system font")?
        }
        (None, None) => {
            log::info!(
                "no font configured, using fixed advance {}px",
                config.layout.advance
            );
            return Ok(Box::new(FixedAdvanceMeasurer::new(
                config.layout.advance,
                config.layout.line_height,
            )));
        }
    };

    let measurer = ShapingMeasurer::new(font, font_size, line_padding)
        .context("configured font cannot be shaped")?;
    Ok(Box::new(measurer))
}

fn print_lines(view: &TextView) {
    println!(
        "{} lines, {}px tall at width {}",
        view.line_count(),
        view.minimum_size_y_required(),
        view.page_width()
    );
    for line in view.layout().lines() {
        println!(
            "  {:>3} {} {:?} y={} x={}..{} {:?}",
            line.line_number,
            line.section_id,
            line.direction,
            line.y_offset,
            line.left(),
            line.right(),
            line.text
        );
    }
}

/// Drag from the top-left corner to the middle of the last line.
fn replay_drag(view: &mut TextView) {
    let Some(last) = view.layout().lines().last() else {
        println!("nothing to select");
        return;
    };
    let end = Point::new(
        (last.left() + last.right()) / 2.0,
        last.y_offset + last.height / 2.0,
    );

    if view.selection_start(Point::new(0.0, 0.0)).is_none() {
        println!("selection disabled");
        return;
    }
    view.selection_continue(end);
    let Some(selection) = view.selection_finish(end) else {
        return;
    };

    println!(
        "selected {:?} -> {:?}",
        selection.lower().character_at,
        selection.upper().character_at
    );
    for region in selection.regions() {
        println!(
            "  line {}: x={}..{} y={}..{}",
            region.line_number,
            region.min_x(),
            region.max_x(),
            region.min_y(),
            region.max_y()
        );
    }
    if let Some(text) = view.selected_text() {
        println!("text: {text:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_measurer_without_font_settings() {
        let config = RuneConfig::default();
        let mut measurer = build_measurer(&config).unwrap();
        let lines = measurer.measure("abc", Direction::Ltr, 0.0, 128.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 18.0);
        assert_eq!(lines[0].height, 14.0);
    }

    #[test]
    fn font_size_alone_uses_system_font() {
        let mut config = RuneConfig::default();
        config.text.font_size = Some(20.0);
        // Hosts without installed fonts cannot shape.
        if load_system_default_font().is_err() {
            assert!(build_measurer(&config).is_err());
            return;
        }
        let Ok(mut measurer) = build_measurer(&config) else {
            return;
        };
        let lines = measurer.measure("abc", Direction::Ltr, 0.0, f32::INFINITY);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].char_count(), 3);
    }

    #[test]
    fn missing_font_path_is_an_error() {
        let mut config = RuneConfig::default();
        config.text.font = Some("does/not/exist.ttf".into());
        assert!(build_measurer(&config).is_err());
    }
}
