use crate::config::ExtendConfig;
use regex::Regex;
use std::collections::HashMap;

/// How a prefix matcher decides whether a value part belongs to it.
///
/// A rule accepts a value when any of its kinds match. Discriminating kinds
/// keep shared prefixes apart (`text-lg` is a font size, `text-white` a
/// color) while `Any` is the catch-all for unambiguous prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Accept any non-empty value
    Any,
    /// Bare number, optionally fractional ("4", "1.5")
    Number,
    /// Spacing-scale value: number, fraction, or a keyword like "px", "auto", "full"
    Length,
    /// Fraction like "1/2"
    Fraction,
    /// T-shirt size ("xs", "sm", "base", "lg", "2xl", ...)
    TshirtSize,
    /// Bracketed arbitrary value ("[3px]", "[#bada55]")
    Arbitrary,
    /// Bracketed arbitrary value that reads as a length ("[2rem]", "[calc(100%-1rem)]")
    ArbitraryLength,
}

/// An ordered prefix matcher
#[derive(Debug, Clone)]
struct PrefixRule {
    prefix: String,
    group: String,
    kinds: Vec<ValueKind>,
}

/// Registry mapping base utility names to mutually-exclusive group ids.
///
/// Lookup order: arbitrary CSS properties, exact matchers, then prefix
/// matchers sorted longest-prefix first (registration order breaks ties, so
/// the font-size rule for `text-` wins over the color rule when both could
/// apply). A leading `-` (negative utility) is ignored for lookup, keeping
/// `mt-2` and `-mt-4` in the same group.
#[derive(Debug, Clone)]
pub struct GroupRegistry {
    exact: HashMap<String, String>,
    prefixes: Vec<PrefixRule>,
    conflicts: HashMap<String, Vec<String>>,
    postfix_conflicts: HashMap<String, Vec<String>>,
    number_re: Regex,
    fraction_re: Regex,
    tshirt_re: Regex,
    arbitrary_re: Regex,
    arbitrary_len_re: Regex,
}

impl GroupRegistry {
    /// Create an empty registry with no matchers
    pub fn empty() -> Self {
        Self {
            exact: HashMap::new(),
            prefixes: Vec::new(),
            conflicts: HashMap::new(),
            postfix_conflicts: HashMap::new(),
            number_re: Regex::new(r"^\d+(\.\d+)?$").unwrap(),
            fraction_re: Regex::new(r"^\d+/\d+$").unwrap(),
            tshirt_re: Regex::new(r"^(\d+)?(xs|sm|md|lg|xl)$|^base$").unwrap(),
            arbitrary_re: Regex::new(r"^\[.+\]$").unwrap(),
            arbitrary_len_re: Regex::new(
                r"^\[(length:)?(-?\d+(\.\d+)?(px|em|rem|%|vh|vw|vmin|vmax|pt|pc|ch|ex|cm|mm|in)?|calc\(.+\)|var\(.+\))\]$",
            )
            .unwrap(),
        }
    }

    /// Create a registry preloaded with the default Tailwind utility groups
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.install_default_groups();
        registry.install_default_conflicts();
        registry
    }

    /// Register an exact class-name matcher
    pub fn add_exact(&mut self, class: &str, group: &str) {
        self.exact.insert(class.to_string(), group.to_string());
    }

    /// Register a prefix matcher.
    ///
    /// Rules are kept sorted longest-prefix first; among equal-length
    /// prefixes, earlier registrations are tried first.
    pub fn add_prefix(&mut self, prefix: &str, group: &str, kinds: &[ValueKind]) {
        let rule = PrefixRule {
            prefix: prefix.to_string(),
            group: group.to_string(),
            kinds: kinds.to_vec(),
        };
        let pos = self
            .prefixes
            .iter()
            .position(|existing| existing.prefix.len() < rule.prefix.len())
            .unwrap_or(self.prefixes.len());
        self.prefixes.insert(pos, rule);
    }

    /// Declare that `group` also overrides each group in `overrides`
    pub fn add_conflict(&mut self, group: &str, overrides: &[&str]) {
        self.conflicts
            .entry(group.to_string())
            .or_default()
            .extend(overrides.iter().map(|g| g.to_string()));
    }

    /// Declare overrides that apply only when the class has a postfix modifier
    pub fn add_postfix_conflict(&mut self, group: &str, overrides: &[&str]) {
        self.postfix_conflicts
            .entry(group.to_string())
            .or_default()
            .extend(overrides.iter().map(|g| g.to_string()));
    }

    /// Apply user extensions on top of the registered groups.
    ///
    /// Patterns ending in `*` become prefix matchers accepting any value;
    /// anything else is an exact matcher.
    pub fn apply_extensions(&mut self, extend: &ExtendConfig) {
        for (group, patterns) in &extend.groups {
            for pattern in patterns {
                match pattern.strip_suffix('*') {
                    Some(prefix) if !prefix.is_empty() => {
                        self.add_prefix(prefix, group, &[ValueKind::Any]);
                    }
                    _ => self.add_exact(pattern, group),
                }
            }
        }
        for (group, overrides) in &extend.conflicts {
            let overrides: Vec<&str> = overrides.iter().map(String::as_str).collect();
            self.add_conflict(group, &overrides);
        }
    }

    /// Resolve the group id for a base utility name, if it is recognized
    pub fn group_of(&self, base: &str) -> Option<String> {
        if base.is_empty() {
            return None;
        }

        // Arbitrary CSS properties form one group per property name
        if let Some(property) = arbitrary_property(base) {
            return Some(format!("arbitrary..{}", property));
        }

        // Negative utilities share their positive counterpart's group
        let lookup = match base.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => base,
        };

        if let Some(group) = self.exact.get(lookup) {
            return Some(group.clone());
        }

        for rule in &self.prefixes {
            if let Some(value) = lookup.strip_prefix(rule.prefix.as_str()) {
                if !value.is_empty() && self.accepts(value, &rule.kinds) {
                    return Some(rule.group.clone());
                }
            }
        }

        None
    }

    /// Groups additionally overridden by `group`
    pub fn conflicts_of(&self, group: &str) -> &[String] {
        self.conflicts
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Groups additionally overridden by `group` when a postfix modifier is present
    pub fn postfix_conflicts_of(&self, group: &str) -> &[String] {
        self.postfix_conflicts
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn accepts(&self, value: &str, kinds: &[ValueKind]) -> bool {
        kinds.iter().any(|kind| match kind {
            ValueKind::Any => true,
            ValueKind::Number => self.number_re.is_match(value),
            ValueKind::Fraction => self.fraction_re.is_match(value),
            ValueKind::TshirtSize => self.tshirt_re.is_match(value),
            ValueKind::Arbitrary => self.arbitrary_re.is_match(value),
            ValueKind::ArbitraryLength => self.arbitrary_len_re.is_match(value),
            ValueKind::Length => {
                self.number_re.is_match(value)
                    || self.fraction_re.is_match(value)
                    || matches!(value, "px" | "auto" | "full" | "screen" | "min" | "max" | "fit")
                    || self.arbitrary_re.is_match(value)
            }
        })
    }

    fn install_default_groups(&mut self) {
        use ValueKind::*;

        // Layout
        self.add_prefix("aspect-", "aspect", &[Any]);
        self.add_exact("container", "container");
        self.add_prefix("columns-", "columns", &[Any]);
        self.add_prefix("break-after-", "break-after", &[Any]);
        self.add_prefix("break-before-", "break-before", &[Any]);
        self.add_prefix("break-inside-", "break-inside", &[Any]);
        for class in [
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-caption", "table-cell", "table-column", "table-column-group",
            "table-footer-group", "table-header-group", "table-row-group", "table-row",
            "flow-root", "grid", "inline-grid", "contents", "list-item", "hidden",
        ] {
            self.add_exact(class, "display");
        }
        self.add_prefix("float-", "float", &[Any]);
        self.add_prefix("clear-", "clear", &[Any]);
        self.add_exact("isolate", "isolation");
        self.add_exact("isolation-auto", "isolation");
        for class in [
            "object-contain", "object-cover", "object-fill", "object-none", "object-scale-down",
        ] {
            self.add_exact(class, "object-fit");
        }
        self.add_prefix("object-", "object-position", &[Any]);
        self.add_prefix("overflow-x-", "overflow-x", &[Any]);
        self.add_prefix("overflow-y-", "overflow-y", &[Any]);
        self.add_prefix("overflow-", "overflow", &[Any]);
        self.add_prefix("overscroll-x-", "overscroll-x", &[Any]);
        self.add_prefix("overscroll-y-", "overscroll-y", &[Any]);
        self.add_prefix("overscroll-", "overscroll", &[Any]);
        for class in ["static", "fixed", "absolute", "relative", "sticky"] {
            self.add_exact(class, "position");
        }
        self.add_prefix("inset-x-", "inset-x", &[Any]);
        self.add_prefix("inset-y-", "inset-y", &[Any]);
        self.add_prefix("inset-", "inset", &[Any]);
        self.add_prefix("top-", "top", &[Any]);
        self.add_prefix("right-", "right", &[Any]);
        self.add_prefix("bottom-", "bottom", &[Any]);
        self.add_prefix("left-", "left", &[Any]);
        self.add_prefix("start-", "start", &[Any]);
        self.add_prefix("end-", "end", &[Any]);
        for class in ["visible", "invisible", "collapse"] {
            self.add_exact(class, "visibility");
        }
        self.add_prefix("z-", "z", &[Any]);

        // Flexbox & grid
        self.add_prefix("basis-", "basis", &[Any]);
        for class in ["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"] {
            self.add_exact(class, "flex-direction");
        }
        for class in ["flex-wrap", "flex-wrap-reverse", "flex-nowrap"] {
            self.add_exact(class, "flex-wrap");
        }
        for class in ["flex-1", "flex-auto", "flex-initial", "flex-none"] {
            self.add_exact(class, "flex");
        }
        self.add_prefix("flex-", "flex", &[Arbitrary]);
        self.add_exact("grow", "grow");
        self.add_prefix("grow-", "grow", &[Number, Arbitrary]);
        self.add_exact("shrink", "shrink");
        self.add_prefix("shrink-", "shrink", &[Number, Arbitrary]);
        self.add_prefix("order-", "order", &[Any]);
        self.add_prefix("grid-cols-", "grid-cols", &[Any]);
        self.add_prefix("col-span-", "col-span", &[Any]);
        self.add_exact("col-auto", "col-span");
        self.add_prefix("col-start-", "col-start", &[Any]);
        self.add_prefix("col-end-", "col-end", &[Any]);
        self.add_prefix("grid-rows-", "grid-rows", &[Any]);
        self.add_prefix("row-span-", "row-span", &[Any]);
        self.add_exact("row-auto", "row-span");
        self.add_prefix("row-start-", "row-start", &[Any]);
        self.add_prefix("row-end-", "row-end", &[Any]);
        self.add_prefix("grid-flow-", "grid-flow", &[Any]);
        self.add_prefix("auto-cols-", "auto-cols", &[Any]);
        self.add_prefix("auto-rows-", "auto-rows", &[Any]);
        self.add_prefix("gap-x-", "gap-x", &[Any]);
        self.add_prefix("gap-y-", "gap-y", &[Any]);
        self.add_prefix("gap-", "gap", &[Any]);
        self.add_prefix("justify-items-", "justify-items", &[Any]);
        self.add_prefix("justify-self-", "justify-self", &[Any]);
        self.add_prefix("justify-", "justify-content", &[Any]);
        self.add_exact("content-none", "content");
        self.add_prefix("content-", "align-content", &[Any]);
        self.add_prefix("items-", "align-items", &[Any]);
        self.add_prefix("self-", "align-self", &[Any]);
        self.add_prefix("place-content-", "place-content", &[Any]);
        self.add_prefix("place-items-", "place-items", &[Any]);
        self.add_prefix("place-self-", "place-self", &[Any]);

        // Spacing
        for (prefix, group) in [
            ("px-", "px"), ("py-", "py"), ("ps-", "ps"), ("pe-", "pe"),
            ("pt-", "pt"), ("pr-", "pr"), ("pb-", "pb"), ("pl-", "pl"), ("p-", "p"),
            ("mx-", "mx"), ("my-", "my"), ("ms-", "ms"), ("me-", "me"),
            ("mt-", "mt"), ("mr-", "mr"), ("mb-", "mb"), ("ml-", "ml"), ("m-", "m"),
        ] {
            self.add_prefix(prefix, group, &[Length, Arbitrary]);
        }
        self.add_exact("space-x-reverse", "space-x-reverse");
        self.add_exact("space-y-reverse", "space-y-reverse");
        self.add_prefix("space-x-", "space-x", &[Length, Arbitrary]);
        self.add_prefix("space-y-", "space-y", &[Length, Arbitrary]);

        // Sizing
        self.add_prefix("min-w-", "min-w", &[Any]);
        self.add_prefix("max-w-", "max-w", &[Any]);
        self.add_prefix("min-h-", "min-h", &[Any]);
        self.add_prefix("max-h-", "max-h", &[Any]);
        self.add_prefix("w-", "w", &[Any]);
        self.add_prefix("h-", "h", &[Any]);
        self.add_prefix("size-", "size", &[Any]);

        // Typography
        for class in [
            "font-thin", "font-extralight", "font-light", "font-normal", "font-medium",
            "font-semibold", "font-bold", "font-extrabold", "font-black",
        ] {
            self.add_exact(class, "font-weight");
        }
        for class in ["font-sans", "font-serif", "font-mono"] {
            self.add_exact(class, "font-family");
        }
        self.add_prefix("font-", "font-weight", &[Number]);
        self.add_prefix("font-", "font-family", &[Any]);
        for class in [
            "text-left", "text-center", "text-right", "text-justify", "text-start", "text-end",
        ] {
            self.add_exact(class, "text-align");
        }
        for class in ["truncate", "text-ellipsis", "text-clip"] {
            self.add_exact(class, "text-overflow");
        }
        for class in ["text-wrap", "text-nowrap", "text-balance", "text-pretty"] {
            self.add_exact(class, "text-wrap");
        }
        self.add_prefix("text-", "font-size", &[TshirtSize, ArbitraryLength]);
        self.add_prefix("text-", "text-color", &[Any]);
        self.add_exact("antialiased", "font-smoothing");
        self.add_exact("subpixel-antialiased", "font-smoothing");
        self.add_exact("italic", "font-style");
        self.add_exact("not-italic", "font-style");
        self.add_prefix("tracking-", "tracking", &[Any]);
        self.add_prefix("leading-", "leading", &[Any]);
        self.add_exact("list-inside", "list-position");
        self.add_exact("list-outside", "list-position");
        self.add_prefix("list-", "list-style-type", &[Any]);
        for class in ["underline", "overline", "line-through", "no-underline"] {
            self.add_exact(class, "text-decoration");
        }
        for class in [
            "decoration-solid", "decoration-double", "decoration-dotted", "decoration-dashed",
            "decoration-wavy",
        ] {
            self.add_exact(class, "decoration-style");
        }
        self.add_exact("decoration-auto", "decoration-thickness");
        self.add_exact("decoration-from-font", "decoration-thickness");
        self.add_prefix("decoration-", "decoration-thickness", &[Number, ArbitraryLength]);
        self.add_prefix("decoration-", "decoration-color", &[Any]);
        self.add_prefix("underline-offset-", "underline-offset", &[Any]);
        for class in ["uppercase", "lowercase", "capitalize", "normal-case"] {
            self.add_exact(class, "text-transform");
        }
        self.add_prefix("indent-", "indent", &[Length, Arbitrary]);
        self.add_prefix("align-", "vertical-align", &[Any]);
        self.add_prefix("whitespace-", "whitespace", &[Any]);
        for class in ["break-normal", "break-words", "break-all", "break-keep"] {
            self.add_exact(class, "word-break");
        }
        self.add_prefix("hyphens-", "hyphens", &[Any]);

        // Backgrounds
        for class in ["bg-fixed", "bg-local", "bg-scroll"] {
            self.add_exact(class, "bg-attachment");
        }
        self.add_prefix("bg-clip-", "bg-clip", &[Any]);
        self.add_prefix("bg-origin-", "bg-origin", &[Any]);
        for class in [
            "bg-bottom", "bg-center", "bg-left", "bg-left-bottom", "bg-left-top", "bg-right",
            "bg-right-bottom", "bg-right-top", "bg-top",
        ] {
            self.add_exact(class, "bg-position");
        }
        for class in [
            "bg-repeat", "bg-no-repeat", "bg-repeat-x", "bg-repeat-y", "bg-repeat-round",
            "bg-repeat-space",
        ] {
            self.add_exact(class, "bg-repeat");
        }
        for class in ["bg-auto", "bg-cover", "bg-contain"] {
            self.add_exact(class, "bg-size");
        }
        self.add_exact("bg-none", "bg-image");
        self.add_prefix("bg-gradient-", "bg-image", &[Any]);
        self.add_prefix("bg-", "bg-color", &[Any]);
        self.add_prefix("from-", "gradient-from", &[Any]);
        self.add_prefix("via-", "gradient-via", &[Any]);
        self.add_prefix("to-", "gradient-to", &[Any]);

        // Borders
        self.add_exact("rounded", "rounded");
        for (prefix, group) in [
            ("rounded-s-", "rounded-s"), ("rounded-e-", "rounded-e"),
            ("rounded-t-", "rounded-t"), ("rounded-r-", "rounded-r"),
            ("rounded-b-", "rounded-b"), ("rounded-l-", "rounded-l"),
            ("rounded-ss-", "rounded-ss"), ("rounded-se-", "rounded-se"),
            ("rounded-ee-", "rounded-ee"), ("rounded-es-", "rounded-es"),
            ("rounded-tl-", "rounded-tl"), ("rounded-tr-", "rounded-tr"),
            ("rounded-br-", "rounded-br"), ("rounded-bl-", "rounded-bl"),
        ] {
            self.add_prefix(prefix, group, &[Any]);
            self.add_exact(prefix.trim_end_matches('-'), group);
        }
        self.add_prefix("rounded-", "rounded", &[Any]);
        self.add_exact("border", "border-w");
        for (side, width_group, color_group) in [
            ("x", "border-w-x", "border-color-x"),
            ("y", "border-w-y", "border-color-y"),
            ("t", "border-w-t", "border-color-t"),
            ("r", "border-w-r", "border-color-r"),
            ("b", "border-w-b", "border-color-b"),
            ("l", "border-w-l", "border-color-l"),
        ] {
            let prefix = format!("border-{}-", side);
            self.add_prefix(&prefix, width_group, &[Number, ArbitraryLength]);
            self.add_prefix(&prefix, color_group, &[Any]);
            self.add_exact(&format!("border-{}", side), width_group);
        }
        for class in [
            "border-solid", "border-dashed", "border-dotted", "border-double", "border-hidden",
            "border-none",
        ] {
            self.add_exact(class, "border-style");
        }
        self.add_exact("border-collapse", "border-collapse");
        self.add_exact("border-separate", "border-collapse");
        self.add_prefix("border-spacing-x-", "border-spacing-x", &[Any]);
        self.add_prefix("border-spacing-y-", "border-spacing-y", &[Any]);
        self.add_prefix("border-spacing-", "border-spacing", &[Any]);
        self.add_prefix("border-", "border-w", &[Number, ArbitraryLength]);
        self.add_prefix("border-", "border-color", &[Any]);
        self.add_exact("divide-x", "divide-x");
        self.add_exact("divide-y", "divide-y");
        self.add_exact("divide-x-reverse", "divide-x-reverse");
        self.add_exact("divide-y-reverse", "divide-y-reverse");
        self.add_prefix("divide-x-", "divide-x", &[Number, ArbitraryLength]);
        self.add_prefix("divide-y-", "divide-y", &[Number, ArbitraryLength]);
        for class in [
            "divide-solid", "divide-dashed", "divide-dotted", "divide-double", "divide-none",
        ] {
            self.add_exact(class, "divide-style");
        }
        self.add_prefix("divide-", "divide-color", &[Any]);
        self.add_exact("outline", "outline-style");
        for class in ["outline-none", "outline-dashed", "outline-dotted", "outline-double"] {
            self.add_exact(class, "outline-style");
        }
        self.add_prefix("outline-offset-", "outline-offset", &[Any]);
        self.add_prefix("outline-", "outline-w", &[Number, ArbitraryLength]);
        self.add_prefix("outline-", "outline-color", &[Any]);
        self.add_exact("ring", "ring-w");
        self.add_exact("ring-inset", "ring-w-inset");
        self.add_prefix("ring-offset-", "ring-offset-w", &[Number, ArbitraryLength]);
        self.add_prefix("ring-offset-", "ring-offset-color", &[Any]);
        self.add_prefix("ring-", "ring-w", &[Number, ArbitraryLength]);
        self.add_prefix("ring-", "ring-color", &[Any]);

        // Effects
        self.add_exact("shadow", "shadow");
        self.add_exact("shadow-inner", "shadow");
        self.add_exact("shadow-none", "shadow");
        self.add_prefix("shadow-", "shadow", &[TshirtSize, Arbitrary]);
        self.add_prefix("shadow-", "shadow-color", &[Any]);
        self.add_prefix("opacity-", "opacity", &[Any]);
        self.add_prefix("mix-blend-", "mix-blend", &[Any]);
        self.add_prefix("bg-blend-", "bg-blend", &[Any]);

        // Filters
        self.add_exact("blur", "blur");
        self.add_prefix("blur-", "blur", &[Any]);
        self.add_prefix("brightness-", "brightness", &[Any]);
        self.add_prefix("contrast-", "contrast", &[Any]);
        self.add_exact("drop-shadow", "drop-shadow");
        self.add_prefix("drop-shadow-", "drop-shadow", &[Any]);
        self.add_exact("grayscale", "grayscale");
        self.add_prefix("grayscale-", "grayscale", &[Any]);
        self.add_prefix("hue-rotate-", "hue-rotate", &[Any]);
        self.add_exact("invert", "invert");
        self.add_prefix("invert-", "invert", &[Any]);
        self.add_prefix("saturate-", "saturate", &[Any]);
        self.add_exact("sepia", "sepia");
        self.add_prefix("sepia-", "sepia", &[Any]);
        self.add_exact("backdrop-blur", "backdrop-blur");
        self.add_prefix("backdrop-blur-", "backdrop-blur", &[Any]);
        self.add_prefix("backdrop-brightness-", "backdrop-brightness", &[Any]);
        self.add_prefix("backdrop-opacity-", "backdrop-opacity", &[Any]);

        // Tables
        self.add_exact("table-auto", "table-layout");
        self.add_exact("table-fixed", "table-layout");
        self.add_prefix("caption-", "caption", &[Any]);

        // Transitions & animation
        self.add_exact("transition", "transition");
        self.add_prefix("transition-", "transition", &[Any]);
        self.add_prefix("duration-", "duration", &[Any]);
        for class in ["ease-linear", "ease-in", "ease-out", "ease-in-out"] {
            self.add_exact(class, "ease");
        }
        self.add_prefix("ease-", "ease", &[Arbitrary]);
        self.add_prefix("delay-", "delay", &[Any]);
        self.add_prefix("animate-", "animate", &[Any]);

        // Transforms
        self.add_prefix("scale-x-", "scale-x", &[Number, Arbitrary]);
        self.add_prefix("scale-y-", "scale-y", &[Number, Arbitrary]);
        self.add_prefix("scale-", "scale", &[Number, Arbitrary]);
        self.add_prefix("rotate-", "rotate", &[Any]);
        self.add_prefix("translate-x-", "translate-x", &[Length, Arbitrary]);
        self.add_prefix("translate-y-", "translate-y", &[Length, Arbitrary]);
        self.add_prefix("skew-x-", "skew-x", &[Any]);
        self.add_prefix("skew-y-", "skew-y", &[Any]);
        self.add_prefix("origin-", "transform-origin", &[Any]);
        for class in ["transform", "transform-gpu", "transform-none"] {
            self.add_exact(class, "transform");
        }

        // Interactivity
        self.add_prefix("accent-", "accent", &[Any]);
        self.add_exact("appearance-none", "appearance");
        self.add_prefix("cursor-", "cursor", &[Any]);
        self.add_prefix("caret-", "caret-color", &[Any]);
        self.add_prefix("pointer-events-", "pointer-events", &[Any]);
        for class in ["resize", "resize-none", "resize-x", "resize-y"] {
            self.add_exact(class, "resize");
        }
        self.add_exact("scroll-auto", "scroll-behavior");
        self.add_exact("scroll-smooth", "scroll-behavior");
        for (prefix, group) in [
            ("scroll-mx-", "scroll-mx"), ("scroll-my-", "scroll-my"),
            ("scroll-mt-", "scroll-mt"), ("scroll-mr-", "scroll-mr"),
            ("scroll-mb-", "scroll-mb"), ("scroll-ml-", "scroll-ml"),
            ("scroll-m-", "scroll-m"),
            ("scroll-px-", "scroll-px"), ("scroll-py-", "scroll-py"),
            ("scroll-pt-", "scroll-pt"), ("scroll-pr-", "scroll-pr"),
            ("scroll-pb-", "scroll-pb"), ("scroll-pl-", "scroll-pl"),
            ("scroll-p-", "scroll-p"),
        ] {
            self.add_prefix(prefix, group, &[Length, Arbitrary]);
        }
        for class in ["snap-start", "snap-end", "snap-center", "snap-align-none"] {
            self.add_exact(class, "snap-align");
        }
        for class in ["snap-none", "snap-x", "snap-y", "snap-both"] {
            self.add_exact(class, "snap-type");
        }
        self.add_exact("snap-normal", "snap-stop");
        self.add_exact("snap-always", "snap-stop");
        self.add_exact("snap-proximity", "snap-strictness");
        self.add_exact("snap-mandatory", "snap-strictness");
        self.add_prefix("touch-", "touch", &[Any]);
        self.add_prefix("select-", "select", &[Any]);
        self.add_prefix("will-change-", "will-change", &[Any]);

        // SVG
        self.add_prefix("fill-", "fill", &[Any]);
        self.add_prefix("stroke-", "stroke-w", &[Number, ArbitraryLength]);
        self.add_prefix("stroke-", "stroke-color", &[Any]);

        // Accessibility
        self.add_exact("sr-only", "sr");
        self.add_exact("not-sr-only", "sr");
    }

    fn install_default_conflicts(&mut self) {
        self.add_conflict(
            "inset",
            &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        );
        self.add_conflict("inset-x", &["right", "left"]);
        self.add_conflict("inset-y", &["top", "bottom"]);
        self.add_conflict("flex", &["grow", "shrink", "basis"]);
        self.add_conflict("gap", &["gap-x", "gap-y"]);
        self.add_conflict("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]);
        self.add_conflict("px", &["pr", "pl"]);
        self.add_conflict("py", &["pt", "pb"]);
        self.add_conflict("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]);
        self.add_conflict("mx", &["mr", "ml"]);
        self.add_conflict("my", &["mt", "mb"]);
        self.add_conflict("size", &["w", "h"]);
        self.add_conflict(
            "rounded",
            &[
                "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
                "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl",
                "rounded-tr", "rounded-br", "rounded-bl",
            ],
        );
        self.add_conflict("rounded-s", &["rounded-ss", "rounded-es"]);
        self.add_conflict("rounded-e", &["rounded-se", "rounded-ee"]);
        self.add_conflict("rounded-t", &["rounded-tl", "rounded-tr"]);
        self.add_conflict("rounded-r", &["rounded-tr", "rounded-br"]);
        self.add_conflict("rounded-b", &["rounded-br", "rounded-bl"]);
        self.add_conflict("rounded-l", &["rounded-tl", "rounded-bl"]);
        self.add_conflict(
            "border-w",
            &[
                "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b",
                "border-w-l",
            ],
        );
        self.add_conflict("border-w-x", &["border-w-r", "border-w-l"]);
        self.add_conflict("border-w-y", &["border-w-t", "border-w-b"]);
        self.add_conflict(
            "border-color",
            &[
                "border-color-x", "border-color-y", "border-color-t", "border-color-r",
                "border-color-b", "border-color-l",
            ],
        );
        self.add_conflict("border-color-x", &["border-color-r", "border-color-l"]);
        self.add_conflict("border-color-y", &["border-color-t", "border-color-b"]);
        self.add_conflict("border-spacing", &["border-spacing-x", "border-spacing-y"]);
        self.add_conflict("overflow", &["overflow-x", "overflow-y"]);
        self.add_conflict("overscroll", &["overscroll-x", "overscroll-y"]);
        self.add_conflict(
            "scroll-m",
            &[
                "scroll-mx", "scroll-my", "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
            ],
        );
        self.add_conflict("scroll-mx", &["scroll-mr", "scroll-ml"]);
        self.add_conflict("scroll-my", &["scroll-mt", "scroll-mb"]);
        self.add_conflict(
            "scroll-p",
            &[
                "scroll-px", "scroll-py", "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
            ],
        );
        self.add_conflict("scroll-px", &["scroll-pr", "scroll-pl"]);
        self.add_conflict("scroll-py", &["scroll-pt", "scroll-pb"]);

        // text-lg/7 also sets the line height
        self.add_postfix_conflict("font-size", &["leading"]);
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extract the property name from an arbitrary CSS property like `[color:red]`
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let colon = inner.find(':')?;
    let property = &inner[..colon];
    if !property.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        Some(property)
    } else {
        None
    }
}
