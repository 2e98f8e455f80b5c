//! Label command

use mesh_labels::{LabelOptions, generate_label_with};

use crate::error::Result;

/// Run the label command, printing the label alone so it can be captured.
pub fn run_label(model: &str, app: &str, options: &LabelOptions) -> Result<()> {
    let label = generate_label_with(model, app, options)?;
    println!("{label}");
    Ok(())
}
