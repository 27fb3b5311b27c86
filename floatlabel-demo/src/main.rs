use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use ratatui::style::Color;
use ratatui::widgets::Block;

use floatlabel::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "floatlabel-demo",
    version,
    about = "Interactive form built from floating-label text fields"
)]
struct Cli {
    /// Placeholder captions, one field per value
    #[arg(
        short = 'f',
        long = "field",
        value_name = "CAPTION",
        default_values_t = ["Email".to_string(), "Password".to_string()]
    )]
    fields: Vec<String>,

    /// Title shown above the form
    #[arg(long = "title", value_name = "TEXT", default_value = "floatlabel demo")]
    title: String,

    /// Label color while a field is focused (name or #rrggbb)
    #[arg(long = "active-color", value_name = "COLOR", default_value = "blue")]
    active_color: Color,

    /// Label color while a field is not focused (name or #rrggbb)
    #[arg(long = "inactive-color", value_name = "COLOR", default_value = "#b3b3b3")]
    inactive_color: Color,

    /// Animation tick granularity in milliseconds
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 33)]
    tick_ms: u64,

    /// Slide the text row down instead of floating the caption up
    #[arg(long = "downward")]
    downward: bool,

    /// Draw a border around each field
    #[arg(long = "boxed")]
    boxed: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let theme = FieldTheme {
        active_color: cli.active_color,
        inactive_color: cli.inactive_color,
        ..FieldTheme::default()
    };
    let direction = if cli.downward {
        AnimationDirection::Downward
    } else {
        AnimationDirection::Upward
    };

    let mut form = FloatForm::new()
        .with_title(cli.title.clone())
        .with_options(FormOptions {
            tick_rate: Duration::from_millis(cli.tick_ms),
            ..FormOptions::default()
        });
    for caption in &cli.fields {
        let mut field = FloatingLabelField::new(caption.clone())
            .with_theme(theme.clone())
            .with_direction(direction);
        if cli.boxed {
            field = field.with_block(Block::bordered());
        }
        form = form.with_field(field);
    }

    let values = form.run().map_err(Report::msg)?;
    match values {
        Some(values) => {
            for (caption, value) in cli.fields.iter().zip(values) {
                println!("{caption}: {value}");
            }
        }
        None => println!("cancelled"),
    }
    Ok(())
}
