use anyhow::Result;
use ratatui::widgets::Block;

use floatlabel::prelude::*;

fn main() -> Result<()> {
    let values = FloatForm::new()
        .with_title("Sign in")
        .with_field(FloatingLabelField::new("Email").with_block(Block::bordered()))
        .with_field(
            FloatingLabelField::new("Password")
                .with_block(Block::bordered())
                .with_direction(AnimationDirection::Downward),
        )
        .run()?;

    match values {
        Some(values) => println!("submitted: {values:?}"),
        None => println!("cancelled"),
    }
    Ok(())
}
