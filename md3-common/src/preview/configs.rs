//! Typed configurations accepted by the design-system components.
//!
//! Each config is built from a props snapshot and rejects values the
//! component does not recognize, the way the component library itself
//! refuses invalid option combinations.

use super::PreviewError;
use crate::snapshot::PropsSnapshot;
use std::str::FromStr;

macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

option_enum!(
    /// Button emphasis
    ButtonVariant {
        Contained => "contained",
        Outlined => "outlined",
        Text => "text",
    }
);

option_enum!(
    /// Component size. Not every component supports `Large`.
    Size {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
);

option_enum!(
    /// Palette color
    Color {
        Primary => "primary",
        Secondary => "secondary",
        Error => "error",
        Warning => "warning",
        Info => "info",
        Success => "success",
        Default => "default",
    }
);

option_enum!(
    TypographyVariant {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Body1 => "body1",
        Body2 => "body2",
        Caption => "caption",
    }
);

option_enum!(
    ChipVariant {
        Filled => "filled",
        Outlined => "outlined",
    }
);

option_enum!(
    TextFieldVariant {
        Filled => "filled",
        Outlined => "outlined",
        Standard => "standard",
    }
);

/// Reads typed values out of a snapshot on behalf of one component
struct ConfigReader<'a> {
    component: &'static str,
    props: &'a PropsSnapshot,
}

impl<'a> ConfigReader<'a> {
    fn new(component: &'static str, props: &'a PropsSnapshot) -> Self {
        Self { component, props }
    }

    /// Enum option; missing means `default`
    fn option<T: FromStr>(&self, field: &str, default: T) -> Result<T, PreviewError> {
        match self.props.get(field) {
            None => Ok(default),
            Some(value) => {
                let text = value.as_str().ok_or_else(|| self.wrong_type(field, "text"))?;
                text.parse().map_err(|_| self.invalid(field, text))
            }
        }
    }

    /// Size restricted to the sizes the component supports
    fn size(&self, supported: &[Size]) -> Result<Size, PreviewError> {
        let size = self.option("size", Size::Medium)?;
        if supported.contains(&size) {
            Ok(size)
        } else {
            Err(self.invalid("size", size.as_str()))
        }
    }

    /// Boolean flag; missing means `false`
    fn flag(&self, field: &str) -> Result<bool, PreviewError> {
        match self.props.get(field) {
            None => Ok(false),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.wrong_type(field, "boolean")),
        }
    }

    /// Display text; missing or blank means `None`
    fn text(&self, field: &str) -> Result<Option<String>, PreviewError> {
        match self.props.get(field) {
            None => Ok(None),
            Some(value) => {
                let text = value.as_str().ok_or_else(|| self.wrong_type(field, "text"))?;
                Ok((!text.trim().is_empty()).then(|| text.to_string()))
            }
        }
    }

    fn invalid(&self, field: &str, value: &str) -> PreviewError {
        PreviewError::InvalidOption {
            component: self.component.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn wrong_type(&self, field: &str, expected: &'static str) -> PreviewError {
        PreviewError::WrongType {
            component: self.component.to_string(),
            field: field.to_string(),
            expected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: Size,
    pub color: Color,
    pub disabled: bool,
    pub full_width: bool,
    pub show_icon: bool,
    pub label: String,
}

impl ButtonConfig {
    pub fn from_props(props: &PropsSnapshot) -> Result<Self, PreviewError> {
        let r = ConfigReader::new("Button", props);
        let variant = r.option("variant", ButtonVariant::Contained)?;
        // Without explicit text the button shows its variant name
        let label = r
            .text("label")?
            .or_else(|| props.get_str("variant").map(str::to_string))
            .unwrap_or_else(|| "Default Button".to_string());
        Ok(Self {
            variant,
            size: r.size(Size::ALL)?,
            color: r.option("color", Color::Primary)?,
            disabled: r.flag("disabled")?,
            full_width: r.flag("full_width")?,
            show_icon: r.flag("show_icon")?,
            label,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypographyConfig {
    pub variant: TypographyVariant,
    pub text: String,
    pub gutter_bottom: bool,
    pub no_wrap: bool,
}

impl TypographyConfig {
    pub fn from_props(props: &PropsSnapshot) -> Result<Self, PreviewError> {
        let r = ConfigReader::new("Typography", props);
        Ok(Self {
            variant: r.option("variant", TypographyVariant::Body1)?,
            text: r.text("text")?.unwrap_or_else(|| "Sample Text".to_string()),
            gutter_bottom: r.flag("gutter_bottom")?,
            no_wrap: r.flag("no_wrap")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipConfig {
    pub label: String,
    pub variant: ChipVariant,
    pub size: Size,
    pub color: Color,
    pub clickable: bool,
    pub deletable: bool,
}

impl ChipConfig {
    pub fn from_props(props: &PropsSnapshot) -> Result<Self, PreviewError> {
        let r = ConfigReader::new("Chip", props);
        Ok(Self {
            label: r.text("label")?.unwrap_or_else(|| "Chip".to_string()),
            variant: r.option("variant", ChipVariant::Filled)?,
            size: r.size(&[Size::Small, Size::Medium])?,
            color: r.option("color", Color::Primary)?,
            clickable: r.flag("clickable")?,
            deletable: r.flag("deletable")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFieldConfig {
    pub label: String,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub variant: TextFieldVariant,
    pub size: Size,
    pub required: bool,
    pub error: bool,
}

impl TextFieldConfig {
    pub fn from_props(props: &PropsSnapshot) -> Result<Self, PreviewError> {
        let r = ConfigReader::new("TextField", props);
        Ok(Self {
            label: r.text("label")?.unwrap_or_else(|| "Label".to_string()),
            placeholder: r.text("placeholder")?,
            helper_text: r.text("helper_text")?,
            variant: r.option("variant", TextFieldVariant::Outlined)?,
            size: r.size(&[Size::Small, Size::Medium])?,
            required: r.flag("required")?,
            error: r.flag("error")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchConfig {
    pub label: String,
    pub color: Color,
    pub size: Size,
    pub checked: bool,
    pub disabled: bool,
}

impl SwitchConfig {
    pub fn from_props(props: &PropsSnapshot) -> Result<Self, PreviewError> {
        let r = ConfigReader::new("Switch", props);
        Ok(Self {
            label: r.text("label")?.unwrap_or_default(),
            color: r.option("color", Color::Primary)?,
            size: r.size(&[Size::Small, Size::Medium])?,
            checked: r.flag("checked")?,
            disabled: r.flag("disabled")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_enum_round_trips_every_value() {
        for v in TypographyVariant::ALL {
            assert_eq!(v.as_str().parse::<TypographyVariant>(), Ok(*v));
        }
        assert!("giant".parse::<Size>().is_err());
    }

    #[test]
    fn test_button_label_falls_back_to_variant_then_default() {
        let props = PropsSnapshot::new().with("variant", "outlined");
        assert_eq!(ButtonConfig::from_props(&props).unwrap().label, "outlined");

        let props = PropsSnapshot::new();
        assert_eq!(
            ButtonConfig::from_props(&props).unwrap().label,
            "Default Button"
        );

        let props = PropsSnapshot::new()
            .with("variant", "text")
            .with("label", "Save");
        assert_eq!(ButtonConfig::from_props(&props).unwrap().label, "Save");
    }

    #[test]
    fn test_unknown_option_value_is_rejected() {
        let props = PropsSnapshot::new().with("variant", "giant");
        assert_eq!(
            ButtonConfig::from_props(&props),
            Err(PreviewError::InvalidOption {
                component: "Button".into(),
                field: "variant".into(),
                value: "giant".into(),
            })
        );
    }

    #[test]
    fn test_chip_does_not_support_large() {
        let props = PropsSnapshot::new().with("size", "large");
        assert!(matches!(
            ChipConfig::from_props(&props),
            Err(PreviewError::InvalidOption { field, .. }) if field == "size"
        ));
    }

    #[test]
    fn test_mistyped_flag_is_rejected() {
        let props = PropsSnapshot::new().with("disabled", "true");
        assert!(matches!(
            SwitchConfig::from_props(&props),
            Err(PreviewError::WrongType { expected: "boolean", .. })
        ));
    }

    #[test]
    fn test_typography_placeholder_text() {
        let config = TypographyConfig::from_props(&PropsSnapshot::new().with("text", "  "))
            .unwrap();
        assert_eq!(config.text, "Sample Text");
        assert_eq!(config.variant, TypographyVariant::Body1);
    }
}
