use super::*;

#[test]
fn menu_toggle_is_created_with_aria_state() -> Result<()> {
    let page = page()?;
    page.assert_exists(".menu-toggle")?;
    assert_eq!(
        page.attr_of(".menu-toggle", "aria-label")?.as_deref(),
        Some("Toggle menu")
    );
    assert_eq!(
        page.attr_of(".menu-toggle", "aria-expanded")?.as_deref(),
        Some("false")
    );
    assert_eq!(page.count(".menu-toggle span")?, 3);
    Ok(())
}

#[test]
fn toggle_click_flips_menu_and_aria_state() -> Result<()> {
    let mut page = page()?;
    page.click(".menu-toggle")?;
    page.assert_has_class(".menu", "active")?;
    page.assert_has_class(".menu-toggle", "active")?;
    assert_eq!(
        page.attr_of(".menu-toggle", "aria-expanded")?.as_deref(),
        Some("true")
    );

    page.click(".menu-toggle")?;
    page.assert_not_class(".menu", "active")?;
    page.assert_not_class(".menu-toggle", "active")?;
    assert_eq!(
        page.attr_of(".menu-toggle", "aria-expanded")?.as_deref(),
        Some("false")
    );
    Ok(())
}

#[test]
fn reinitialization_creates_no_duplicate_controls() -> Result<()> {
    let mut page = page()?;
    page.initialize()?;
    page.initialize()?;
    assert_eq!(page.count(".menu-toggle")?, 1);
    assert_eq!(page.count(".scroll-to-top")?, 1);
    Ok(())
}

#[test]
fn menu_toggle_needs_a_navigation_bar() -> Result<()> {
    let page = Page::from_html("<ul class='menu'></ul>")?;
    assert!(!page.exists(".menu-toggle")?);
    Ok(())
}

#[test]
fn scroll_top_button_appears_past_the_threshold() -> Result<()> {
    let mut page = page()?;
    page.assert_not_class(".scroll-to-top", "visible")?;

    page.scroll_to(501)?;
    page.assert_has_class(".scroll-to-top", "visible")?;

    page.scroll_to(500)?;
    page.assert_not_class(".scroll-to-top", "visible")?;
    Ok(())
}

#[test]
fn scroll_top_click_returns_to_the_top() -> Result<()> {
    let mut page = page()?;
    page.scroll_to(900)?;
    page.assert_has_class(".scroll-to-top", "visible")?;

    page.click(".scroll-to-top")?;
    assert_eq!(page.scroll_offset(), 0);
    page.assert_not_class(".scroll-to-top", "visible")?;
    Ok(())
}

#[test]
fn card_hover_applies_and_clears_the_lift_transform() -> Result<()> {
    let mut page = page()?;
    page.dispatch("#card-1", "mouseenter")?;
    assert_eq!(
        page.style_of("#card-1", "transform")?,
        "translateY(-10px) scale(1.02)"
    );

    page.dispatch("#card-1", "mouseleave")?;
    assert_eq!(page.style_of("#card-1", "transform")?, "translateY(0) scale(1)");
    Ok(())
}

#[test]
fn banner_parallax_tracks_half_the_scroll_offset() -> Result<()> {
    let mut page = page()?;
    page.scroll_to(800)?;
    assert_eq!(page.style_of(".banner", "transform")?, "translateY(400px)");

    page.scroll_to(300)?;
    assert_eq!(page.style_of(".banner", "transform")?, "translateY(150px)");
    Ok(())
}

#[test]
fn pages_without_a_banner_skip_the_parallax() -> Result<()> {
    let mut page = Page::from_html("<section id='only' style='height: 4000px'></section>")?;
    page.scroll_to(600)?;
    assert!(!page.exists(".banner")?);
    Ok(())
}

#[test]
fn typewriter_reveals_text_one_character_per_tick() -> Result<()> {
    let mut page = Page::from_html("<h1 id='tagline'>replace me</h1>")?;
    page.start_typewriter("#tagline", "Hi!")?;
    page.assert_text("#tagline", "H")?;

    page.advance_time(100)?;
    page.assert_text("#tagline", "Hi")?;

    page.advance_time(100)?;
    page.assert_text("#tagline", "Hi!")?;
    assert_eq!(page.pending_timers().len(), 1);

    page.advance_time(100)?;
    page.assert_text("#tagline", "Hi!")?;
    assert!(page.pending_timers().is_empty());
    Ok(())
}

#[test]
fn typewriter_with_empty_text_clears_the_target() -> Result<()> {
    let mut page = Page::from_html("<h1 id='tagline'>replace me</h1>")?;
    page.start_typewriter("#tagline", "")?;
    page.assert_text("#tagline", "")?;
    assert!(page.pending_timers().is_empty());
    Ok(())
}
