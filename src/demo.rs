//! The demonstration harness: fixed scenarios rendered as text, plus a large reverse-ordered
//! input checked against the standard library's sort.
//!
//! Everything writes to a caller-supplied `io::Write` so the output can be captured in tests.

use crate::digit_shift_sort_builder::DigitShiftSortBuilder;
use crate::display::{format_preview, format_sequence};
use crate::error::Result;
use crate::signed_key::check_non_negative;
use crate::tuner::Tuner;
use crate::tuners::StandardTuner;
use crate::verify::verify_against_reference;
use crate::DigitKey;
use log::info;
use std::io::Write;

/// Empty, singleton, mixed widths, duplicates, descending and trailing zeros.
pub const SCENARIOS: &[&[u64]] = &[
    &[],
    &[5],
    &[4, 2, 8, 1, 6],
    &[170, 45, 75, 90, 802, 24, 2, 66],
    &[5, 5, 5, 2, 2, 1],
    &[987, 654, 321],
    &[100, 10, 1],
];

pub const PREVIEW_LEN: usize = 10;

pub struct DemoConfig<'a> {
    /// The large scenario sorts `large_size` down to 1.
    pub large_size: u64,
    pub tuner: &'a dyn Tuner,
}

impl Default for DemoConfig<'_> {
    fn default() -> Self {
        Self {
            large_size: 1_000,
            tuner: &StandardTuner,
        }
    }
}

fn sort_with(values: &mut [u64], tuner: &dyn Tuner) {
    let len = values.len();
    let stats = DigitShiftSortBuilder::new(values).with_tuner(tuner).sort();

    info!(
        "sorted {} values in {} passes, {} moves",
        len, stats.passes, stats.moves
    );
}

pub fn run_scenarios<W>(out: &mut W, tuner: &dyn Tuner) -> Result<()>
where
    W: Write,
{
    for &scenario in SCENARIOS {
        let mut sorted = scenario.to_vec();
        sort_with(&mut sorted, tuner);

        writeln!(out, "Original: {}", format_sequence(scenario))?;
        writeln!(out, "Sorted:   {}", format_sequence(&sorted))?;
        writeln!(out)?;
    }

    Ok(())
}

/// Sorts `size` down to 1 and verifies the result, returning `Error::Mismatch` on failure.
pub fn run_large_scenario<W>(out: &mut W, size: u64, tuner: &dyn Tuner) -> Result<()>
where
    W: Write,
{
    let original: Vec<u64> = (1..=size).rev().collect();
    let mut sorted = original.clone();
    sort_with(&mut sorted, tuner);

    writeln!(
        out,
        "Original (large, first {}): {}",
        PREVIEW_LEN,
        format_preview(&original, PREVIEW_LEN)
    )?;
    writeln!(
        out,
        "Sorted (large, first {}):   {}",
        PREVIEW_LEN,
        format_preview(&sorted, PREVIEW_LEN)
    )?;

    verify_against_reference(&original, &sorted, |v: &u64| v.key())?;
    writeln!(out, "Large array test passed.")?;

    Ok(())
}

pub fn run_demo<W>(out: &mut W, config: &DemoConfig) -> Result<()>
where
    W: Write,
{
    run_scenarios(out, config.tuner)?;
    run_large_scenario(out, config.large_size, config.tuner)
}

/// Sorts user supplied values, rejecting negatives before anything is printed.
pub fn run_values<W>(out: &mut W, values: &[i128], tuner: &dyn Tuner) -> Result<()>
where
    W: Write,
{
    check_non_negative(values)?;

    let mut sorted = values.to_vec();
    DigitShiftSortBuilder::new(&mut sorted)
        .with_tuner(tuner)
        .sort_by_key(|v| *v as u128);

    writeln!(out, "Original: {}", format_sequence(values))?;
    writeln!(out, "Sorted:   {}", format_sequence(&sorted))?;

    verify_against_reference(values, &sorted, |v: &i128| *v as u128)
}
