// THEORY:
// The `parsers` module turns the text of one option value into one typed value.
// Each function is independent and stateless: it reads a `&str`, returns the value
// or an `OptionError`, and touches nothing else. The only exception is
// `parse_wipe`, which appends to the list it is given and reports its failures.
//
// Two scanners carry all of the syntax:
// - `parse_symmetric` reads "a" or "a,b" into a pair, broadcasting a lone value
//   to both halves. Sizes, offsets, scan steps and float pairs go through it.
// - `scan_four` reads exactly four comma-separated integers for rectangles and
//   borders.
// Every public parser is then a scanner call plus that domain's own range check.
//
// Fields are split on a single ',' only. Whitespace around a field is ignored.

use crate::core_modules::direction::Direction;
use crate::core_modules::geometry::geometry::{Border, Delta, Point, Rectangle, RectangleSize};
use crate::core_modules::pixel::pixel::{PackedColor, Pixel};
use crate::core_modules::wipes::Wipes;
use crate::error::{OptionError, OptionResult};
use std::str::FromStr;
use tracing::warn;

const SYMMETRIC_INTEGERS: &str = "one integer or two comma-separated integers";
const SYMMETRIC_FLOATS: &str = "one number or two comma-separated numbers";
const FOUR_INTEGERS: &str = "four comma-separated integers";

/// Reads one value, or two separated by a comma, into a pair.
fn parse_symmetric<T>(text: &str, expected: &'static str) -> OptionResult<(T, T)>
where
    T: FromStr + Copy,
{
    let mut fields = text.split(',');
    let first = fields.next().unwrap_or_default();
    let second = fields.next();
    if fields.next().is_some() {
        return Err(OptionError::syntax(text, expected));
    }

    let read = |field: &str| -> OptionResult<T> {
        field
            .trim()
            .parse::<T>()
            .map_err(|_| OptionError::syntax(text, expected))
    };

    let value_1 = read(first)?;
    let value_2 = match second {
        Some(field) => read(field)?,
        None => value_1,
    };
    Ok((value_1, value_2))
}

/// Reads exactly four comma-separated integers.
fn scan_four(text: &str) -> OptionResult<[i32; 4]> {
    let mut values = [0i32; 4];
    let mut fields = text.split(',');
    for slot in values.iter_mut() {
        *slot = fields
            .next()
            .and_then(|field| field.trim().parse().ok())
            .ok_or_else(|| OptionError::syntax(text, FOUR_INTEGERS))?;
    }
    if fields.next().is_some() {
        return Err(OptionError::syntax(text, FOUR_INTEGERS));
    }
    Ok(values)
}

/// Parses "n" as `(n, n)` or "a,b" as `(a, b)`.
pub fn parse_symmetric_integers(text: &str) -> OptionResult<(i32, i32)> {
    parse_symmetric(text, SYMMETRIC_INTEGERS)
}

/// Float counterpart of [`parse_symmetric_integers`].
pub fn parse_symmetric_floats(text: &str) -> OptionResult<(f32, f32)> {
    parse_symmetric(text, SYMMETRIC_FLOATS)
}

/// Parses "x0,y0,x1,y1". The rectangle must enclose at least one pixel.
pub fn parse_rectangle(text: &str) -> OptionResult<Rectangle> {
    let [x0, y0, x1, y1] = scan_four(text)?;
    let rect = Rectangle::new(Point::new(x0, y0), Point::new(x1, y1));

    if rect.pixel_count() == 0 {
        return Err(OptionError::range(text, "rectangle encloses no pixels"));
    }
    Ok(rect)
}

/// Parses a size as "n" (square) or "width,height". Both must be non-negative.
pub fn parse_rectangle_size(text: &str) -> OptionResult<RectangleSize> {
    let (width, height) = parse_symmetric_integers(text)?;
    if width < 0 || height < 0 {
        return Err(OptionError::range(text, "size must not be negative"));
    }
    Ok(RectangleSize::new(width, height))
}

/// Parses an offset as "n" or "horizontal,vertical". Any sign is accepted.
pub fn parse_delta(text: &str) -> OptionResult<Delta> {
    let (horizontal, vertical) = parse_symmetric_integers(text)?;
    Ok(Delta::new(horizontal, vertical))
}

/// Like [`parse_delta`], but both steps must be strictly positive.
pub fn parse_scan_step(text: &str) -> OptionResult<Delta> {
    let step = parse_delta(text)?;
    if step.horizontal <= 0 || step.vertical <= 0 {
        return Err(OptionError::range(text, "scan step must be positive"));
    }
    Ok(step)
}

/// Parses "left,top,right,bottom". No margin may be negative.
pub fn parse_border(text: &str) -> OptionResult<Border> {
    let [left, top, right, bottom] = scan_four(text)?;
    let border = Border::new(left, top, right, bottom);

    if left < 0 || top < 0 || right < 0 || bottom < 0 {
        return Err(OptionError::range(text, "border must not be negative"));
    }
    Ok(border)
}

/// Parses `black`, `white` (case-sensitive), or a packed `0xRRGGBB` value
/// written in decimal.
pub fn parse_color(text: &str) -> OptionResult<Pixel> {
    match text {
        "black" => return Ok(Pixel::BLACK),
        "white" => return Ok(Pixel::WHITE),
        _ => {}
    }

    text.trim()
        .parse::<PackedColor>()
        .map(Pixel::from_value)
        .map_err(|_| OptionError::syntax(text, "'black', 'white' or a numeric color"))
}

/// Reads a direction from the letters it contains.
///
/// Any `h`/`H` selects horizontal and any `v`/`V` selects vertical, wherever
/// they appear ("horizontal", "vertical", "hv" and "vh" all work, and so does
/// anything else containing those letters). A text with neither letter is
/// only accepted if it is `none`, in any case.
pub fn parse_direction(text: &str) -> OptionResult<Direction> {
    let direction = Direction::new(
        text.contains(['h', 'H']),
        text.contains(['v', 'V']),
    );

    if direction.is_none() && !text.eq_ignore_ascii_case("none") {
        return Err(OptionError::syntax(
            text,
            "'horizontal', 'vertical', both, or 'none'",
        ));
    }
    Ok(direction)
}

/// Appends the rectangle in `text` to `wipes`.
///
/// A full list is reported before the text is even looked at. On any failure
/// the list is left as it was and a warning naming `option` is emitted.
pub fn parse_wipe(option: &str, text: &str, wipes: &mut Wipes) -> OptionResult<()> {
    if wipes.is_full() {
        let err = OptionError::WipeCapacity {
            option: option.to_owned(),
            capacity: Wipes::capacity(),
            value: text.to_owned(),
        };
        warn!(option, capacity = Wipes::capacity(), value = text, "{err}");
        return Err(err);
    }

    let area = parse_rectangle(text).map_err(|_| {
        let err = OptionError::InvalidWipe {
            option: option.to_owned(),
            value: text.to_owned(),
        };
        warn!(option, value = text, "{err}");
        err
    })?;

    wipes.try_push(area).map_err(|_| OptionError::WipeCapacity {
        option: option.to_owned(),
        capacity: Wipes::capacity(),
        value: text.to_owned(),
    })
}
