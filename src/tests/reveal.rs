use super::*;

#[test]
fn setup_hides_sections_and_cards() -> Result<()> {
    let page = page()?;
    page.assert_has_class("#about", "fade-out")?;
    page.assert_has_class("#projects", "fade-out")?;
    page.assert_has_class("#contact", "fade-out")?;
    page.assert_has_class("#card-1", "fade-out")?;
    Ok(())
}

#[test]
fn elements_already_in_view_reveal_at_startup() -> Result<()> {
    let page = page()?;
    page.assert_has_class("#about", "fade-in")?;
    page.assert_not_class("#projects", "fade-in")?;
    page.assert_not_class("#contact", "fade-in")?;
    page.assert_not_class("#card-1", "fade-in")?;
    Ok(())
}

#[test]
fn scrolling_reveals_elements_entering_the_viewport() -> Result<()> {
    let mut page = page()?;
    page.scroll_to(400)?;
    page.assert_has_class("#projects", "fade-in")?;
    page.assert_has_class("#card-1", "fade-in")?;
    page.assert_has_class("#card-2", "fade-in")?;
    page.assert_not_class("#card-3", "fade-in")?;
    page.assert_not_class("#contact", "fade-in")?;

    page.scroll_to(800)?;
    page.assert_has_class("#card-3", "fade-in")?;
    page.assert_has_class("#contact", "fade-in")?;
    Ok(())
}

#[test]
fn reveal_fires_at_most_once_per_element() -> Result<()> {
    let mut page = page()?;
    page.enable_trace(true);
    page.set_trace_stderr(false);

    page.scroll_to(400)?;
    page.scroll_to(0)?;
    page.scroll_to(400)?;

    let logs = page.take_trace_logs();
    let reveals = logs
        .iter()
        .filter(|line| line.as_str() == "[reveal] section#projects")
        .count();
    assert_eq!(reveals, 1);
    page.assert_has_class("#projects", "fade-in")?;
    Ok(())
}

#[test]
fn cards_get_staggered_transition_delays() -> Result<()> {
    let page = page()?;
    assert_eq!(page.style_of("#card-1", "transition-delay")?, "0s");
    assert_eq!(page.style_of("#card-2", "transition-delay")?, "0.1s");
    assert_eq!(page.style_of("#card-3", "transition-delay")?, "0.2s");
    Ok(())
}

#[test]
fn banner_is_not_observed_for_reveal() -> Result<()> {
    let mut page = page()?;
    page.scroll_to(1480)?;
    page.assert_not_class(".banner", "fade-in")?;
    page.assert_not_class(".banner", "fade-out")?;
    Ok(())
}
