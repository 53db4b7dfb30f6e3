//! Per-attribute style merge

use gridform_core::style::{
    Alignment, BorderEdge, BorderLineStyle, BorderSide, BorderStyle, FillStyle, FontStyle, Style,
};

use super::{AlignmentSpec, BorderSpec, FillSpec, FontSpec, SideSpec, StyleSpec};

/// Merges a [`StyleSpec`] over a base [`Style`]
///
/// Resolution never mutates the base: each call builds a new `Style` in which
/// every attribute present in the override replaces the base attribute and
/// every absent attribute is copied from the base. The base's number format
/// passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver;

impl StyleResolver {
    pub fn resolve(spec: &StyleSpec, base: &Style) -> Style {
        log::trace!("resolving style override {:?}", spec);
        Style {
            font: merge_opt(spec.font.as_ref(), &base.font, FontSpec::apply),
            border: merge_opt(spec.border.as_ref(), &base.border, BorderSpec::apply),
            fill: merge_opt(spec.fill.as_ref(), &base.fill, FillSpec::apply),
            alignment: merge_opt(spec.alignment.as_ref(), &base.alignment, AlignmentSpec::apply),
            number_format: base.number_format.clone(),
        }
    }
}

fn merge_opt<S, T: Clone>(spec: Option<&S>, base: &T, apply: fn(&S, &T) -> T) -> T {
    match spec {
        Some(spec) => apply(spec, base),
        None => base.clone(),
    }
}

impl FontSpec {
    fn apply(&self, base: &FontStyle) -> FontStyle {
        FontStyle {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            size: self.size.unwrap_or(base.size),
            bold: self.bold.unwrap_or(base.bold),
            italic: self.italic.unwrap_or(base.italic),
            underline: self.underline.unwrap_or(base.underline),
            strikethrough: self.strikethrough.unwrap_or(base.strikethrough),
            color: self.color.unwrap_or(base.color),
            vertical_align: self.vertical_align.unwrap_or(base.vertical_align),
        }
    }
}

impl BorderSpec {
    fn apply(&self, base: &BorderStyle) -> BorderStyle {
        let mut merged = base.clone();
        for side in BorderSide::ALL {
            if let Some(spec) = self.side(side) {
                *merged.edge_mut(side) = spec.apply(base.edge(side).as_ref());
            }
        }
        merged
    }
}

impl SideSpec {
    /// A side whose line style resolves to `none` is no border at all
    fn apply(&self, base: Option<&BorderEdge>) -> Option<BorderEdge> {
        let base = base.cloned().unwrap_or_default();
        let style = self.style.unwrap_or(base.style);
        if style == BorderLineStyle::None {
            return None;
        }
        Some(BorderEdge::new(style, self.color.unwrap_or(base.color)))
    }
}

impl FillSpec {
    fn apply(&self, base: &FillStyle) -> FillStyle {
        let (pattern, foreground, background) = base.parts();
        FillStyle::from_parts(
            self.pattern.unwrap_or(pattern),
            self.start_color.unwrap_or(foreground),
            self.end_color.unwrap_or(background),
        )
    }
}

impl AlignmentSpec {
    fn apply(&self, base: &Alignment) -> Alignment {
        Alignment {
            horizontal: self.horizontal.unwrap_or(base.horizontal),
            vertical: self.vertical.unwrap_or(base.vertical),
            wrap_text: self.wrap_text.unwrap_or(base.wrap_text),
            shrink_to_fit: self.shrink_to_fit.unwrap_or(base.shrink_to_fit),
            indent: self.indent.unwrap_or(base.indent),
            rotation: self.rotation.unwrap_or(base.rotation),
        }
    }
}
