// THEORY:
// `Options` is the single record every option value ends up in. A front end
// creates it once with `Options::new()`, applies each recognized option by
// calling a parser and storing the result in a field, and then hands it to the
// filter pipeline, which only reads it.
//
// The defaults encode "nothing configured yet" without borrowing any value a
// user could legitimately set:
// - Sizes and stream indexes that were never given are `None`.
// - The primary sheet selector is `MultiIndex::All`; every per-operation set is
//   `MultiIndex::None`, so no operation is switched off for any sheet.
// - The sheet range starts at 1 and has no upper bound.

use crate::core_modules::direction::Direction;
use crate::core_modules::geometry::geometry::{Border, Delta, RectangleSize};
use crate::core_modules::multi_index::{MultiIndex, SheetNumber};
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::wipes::Wipes;
use crate::error::OptionError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many pages one sheet carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    #[default]
    Single,
    Double,
    /// No layout-dependent processing.
    None,
}

impl FromStr for Layout {
    type Err = OptionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("single") {
            Ok(Layout::Single)
        } else if text.eq_ignore_ascii_case("double") {
            Ok(Layout::Double)
        } else if text.eq_ignore_ascii_case("none") {
            Ok(Layout::None)
        } else {
            Err(OptionError::syntax(text, "'single', 'double' or 'none'"))
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Single => "single",
            Layout::Double => "double",
            Layout::None => "none",
        })
    }
}

/// The complete set of processing options for one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    pub layout: Layout,

    /// First sheet to process (1-based).
    pub start_sheet: SheetNumber,
    /// Last sheet to process; `None` runs until the input is exhausted.
    pub end_sheet: Option<SheetNumber>,
    pub start_input: Option<i32>,
    pub start_output: Option<i32>,
    /// Input files consumed per sheet.
    pub input_count: i32,
    /// Output files produced per sheet.
    pub output_count: i32,

    /// Which sheets to process at all.
    pub sheet_multi_index: MultiIndex,
    pub exclude_multi_index: MultiIndex,
    pub ignore_multi_index: MultiIndex,
    pub insert_blank: MultiIndex,
    pub replace_blank: MultiIndex,

    // Sheets on which a single filter is switched off.
    pub no_blackfilter_multi_index: MultiIndex,
    pub no_noisefilter_multi_index: MultiIndex,
    pub no_blurfilter_multi_index: MultiIndex,
    pub no_grayfilter_multi_index: MultiIndex,
    pub no_mask_scan_multi_index: MultiIndex,
    pub no_mask_center_multi_index: MultiIndex,
    pub no_deskew_multi_index: MultiIndex,
    pub no_wipe_multi_index: MultiIndex,
    pub no_border_multi_index: MultiIndex,
    pub no_border_scan_multi_index: MultiIndex,
    pub no_border_align_multi_index: MultiIndex,

    pub pre_shift: Delta,
    pub post_shift: Delta,

    pub sheet_size: Option<RectangleSize>,
    pub page_size: Option<RectangleSize>,
    pub post_page_size: Option<RectangleSize>,
    pub stretch_size: Option<RectangleSize>,
    pub post_stretch_size: Option<RectangleSize>,

    pub pre_wipes: Wipes,
    pub wipes: Wipes,
    pub post_wipes: Wipes,

    pub pre_border: Border,
    pub border: Border,
    pub post_border: Border,

    pub mask_scan_direction: Direction,
    pub mask_scan_step: Option<Delta>,
    pub sheet_background: Pixel,
}

impl Options {
    pub fn new() -> Self {
        let options = Self {
            layout: Layout::Single,

            start_sheet: 1,
            end_sheet: None,
            start_input: None,
            start_output: None,
            input_count: 1,
            output_count: 1,

            sheet_multi_index: MultiIndex::All,
            exclude_multi_index: MultiIndex::None,
            ignore_multi_index: MultiIndex::None,
            insert_blank: MultiIndex::None,
            replace_blank: MultiIndex::None,

            no_blackfilter_multi_index: MultiIndex::None,
            no_noisefilter_multi_index: MultiIndex::None,
            no_blurfilter_multi_index: MultiIndex::None,
            no_grayfilter_multi_index: MultiIndex::None,
            no_mask_scan_multi_index: MultiIndex::None,
            no_mask_center_multi_index: MultiIndex::None,
            no_deskew_multi_index: MultiIndex::None,
            no_wipe_multi_index: MultiIndex::None,
            no_border_multi_index: MultiIndex::None,
            no_border_scan_multi_index: MultiIndex::None,
            no_border_align_multi_index: MultiIndex::None,

            pre_shift: Delta::new(0, 0),
            post_shift: Delta::new(0, 0),

            sheet_size: None,
            page_size: None,
            post_page_size: None,
            stretch_size: None,
            post_stretch_size: None,

            pre_wipes: Wipes::new(),
            wipes: Wipes::new(),
            post_wipes: Wipes::new(),

            pre_border: Border::default(),
            border: Border::default(),
            post_border: Border::default(),

            mask_scan_direction: Direction::NONE,
            mask_scan_step: None,
            sheet_background: Pixel::BLACK,
        };
        debug!(
            start_sheet = options.start_sheet,
            layout = %options.layout,
            "options initialized with defaults"
        );
        options
    }

    /// Whether `sheet` falls inside the start/end range and is picked by the
    /// primary sheet selector.
    pub fn sheet_in_range(&self, sheet: SheetNumber) -> bool {
        if sheet < self.start_sheet {
            return false;
        }
        if let Some(end) = self.end_sheet {
            if sheet > end {
                return false;
            }
        }
        self.sheet_multi_index.contains(sheet)
    }

    /// Every per-operation selection set, by option-style name.
    pub fn operation_multi_indexes(&self) -> [(&'static str, &MultiIndex); 15] {
        [
            ("exclude", &self.exclude_multi_index),
            ("ignore", &self.ignore_multi_index),
            ("insert-blank", &self.insert_blank),
            ("replace-blank", &self.replace_blank),
            ("no-blackfilter", &self.no_blackfilter_multi_index),
            ("no-noisefilter", &self.no_noisefilter_multi_index),
            ("no-blurfilter", &self.no_blurfilter_multi_index),
            ("no-grayfilter", &self.no_grayfilter_multi_index),
            ("no-mask-scan", &self.no_mask_scan_multi_index),
            ("no-mask-center", &self.no_mask_center_multi_index),
            ("no-deskew", &self.no_deskew_multi_index),
            ("no-wipe", &self.no_wipe_multi_index),
            ("no-border", &self.no_border_multi_index),
            ("no-border-scan", &self.no_border_scan_multi_index),
            ("no-border-align", &self.no_border_align_multi_index),
        ]
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
