use super::Theme;
use super::ThemeName;

#[test]
fn it_parses_names() {
    assert_eq!(ThemeName::parse("light"), Some(ThemeName::Light));
    assert_eq!(ThemeName::parse("dark"), Some(ThemeName::Dark));
    assert_eq!(ThemeName::parse("sepia"), None);
}

#[test]
fn it_toggles() {
    let theme = Theme::new(ThemeName::Dark);
    assert_eq!(theme.toggled().name, ThemeName::Light);
    assert_eq!(theme.toggled().toggled(), theme);
}

#[test]
fn it_falls_back_to_dark() {
    assert_eq!(Theme::from_config("").name, ThemeName::Dark);
    assert_eq!(Theme::from_config("light").name, ThemeName::Light);
}
