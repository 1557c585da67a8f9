//! The `rockgrade strength` command.

use anyhow::Result;

use rockgrade_core::strength::StrengthScale;

pub fn execute(value: Option<f64>, band: Option<usize>) -> Result<()> {
    let scale = StrengthScale::default();

    let (index, mpa) = match (value, band) {
        (Some(mpa), _) => match scale.classify(mpa) {
            Some(index) => (index, mpa),
            None => anyhow::bail!("{mpa} MPa is below the weakest band (1-5 MPa)"),
        },
        (None, Some(index)) => match scale.band(index) {
            Some(band) => (index, band.mid_value),
            None => anyhow::bail!(
                "band index {index} out of range (0-{})",
                scale.bands().len() - 1
            ),
        },
        (None, None) => {
            for (idx, band) in scale.bands().iter().enumerate() {
                println!("{idx}: {:>8} MPa  {}", band.range, band.description);
            }
            return Ok(());
        }
    };

    let band = &scale.bands()[index];
    println!("Uniaxial compressive strength: {mpa} MPa");
    println!("Band {index}: {} MPa", band.range);
    println!("  {}", band.description);
    println!("  Examples: {}", band.examples);

    Ok(())
}
