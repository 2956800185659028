// Dice notation evaluator
//
// Evaluates a parsed RollSpec against any random source. Rules are checked in a fixed order and
// the first match wins; combinations outside the list roll 0.

use super::{DiceError, Operator, RollMode, RollSpec};
use crate::distribution;
use crate::rng::RandomSource;

/// Evaluate a roll
///
/// | N1 | W | mode | N2 | result                       |
/// |----|---|------|----|------------------------------|
/// | ✓  | ✓ | `d`  | ✓  | best N1 of W dice (N2 sides) |
/// | ✓  |   | `d`  | ✓  | N1 dice with N2 sides        |
/// | ✓  |   | `:`  | ✓  | uniform in `[N1, N2]`        |
/// | ✓  | ✓ |      |    | uniform in `[N1, W]`         |
/// | ✓  |   |      |    | N1                           |
/// |    |   | `d`  | ✓  | one N2-sided die             |
/// |    |   | `:`  | ✓  | uniform in `[0, N2]`         |
/// | ?  | ? | ?    | ?  | 0 (no rule matched)          |
///
/// The trailing operator, when both it and its operand are present, is then applied once.
///
/// # Errors
/// Distribution argument errors (non-positive sides, empty ranges, empty best-of pools) and
/// arithmetic faults from [`apply_operator`].
pub fn evaluate<R: RandomSource + ?Sized>(spec: &RollSpec, rng: &mut R) -> Result<i32, DiceError> {
    use RollMode::{Dice, Range};

    let base = match (spec.low, spec.best_of, spec.mode, spec.sides) {
        (Some(keep), Some(dice), Some(Dice), Some(sides)) => {
            let mut pool = distribution::independent_rolls(rng, dice, sides)?;
            distribution::best_of_pool(keep, &mut pool)?
        }
        (Some(count), None, Some(Dice), Some(sides)) => {
            distribution::sum_of_dice(rng, count, sides)?
        }
        (Some(lo), None, Some(Range), Some(hi)) => distribution::between_inclusive(rng, lo, hi)?,
        (Some(lo), Some(hi), None, None) => distribution::between_inclusive(rng, lo, hi)?,
        (Some(value), None, None, None) => value,
        (None, None, Some(Dice), Some(sides)) => distribution::uniform_int(rng, sides)?,
        (None, None, Some(Range), Some(hi)) => distribution::between_inclusive(rng, 0, hi)?,
        _ => 0,
    };

    match (spec.op, spec.operand) {
        (Some(op), Some(operand)) => apply_operator(base, op, operand),
        _ => Ok(base),
    }
}

/// Apply one trailing operator with checked arithmetic
///
/// Division truncates toward zero.
///
/// # Errors
/// - [`DiceError::DivisionByZero`] for `/ 0`
/// - [`DiceError::Overflow`] if the result does not fit in `i32`
pub fn apply_operator(value: i32, op: Operator, operand: i32) -> Result<i32, DiceError> {
    let result = match op {
        Operator::Add => value.checked_add(operand),
        Operator::Subtract => value.checked_sub(operand),
        Operator::Multiply => value.checked_mul(operand),
        Operator::Divide => {
            if operand == 0 {
                return Err(DiceError::DivisionByZero);
            }
            value.checked_div(operand)
        }
    };
    result.ok_or(DiceError::Overflow)
}
