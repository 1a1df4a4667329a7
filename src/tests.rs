use super::*;

mod navigation;
mod reveal;
mod widgets;

fn portfolio_html() -> &'static str {
    r#"
    <nav class='navigation' style='height: 80px'>
      <ul class='menu'>
        <li><a href='#about'>About</a></li>
        <li><a href='#projects'>Projects</a></li>
        <li><a href='#contact'>Contact</a></li>
      </ul>
    </nav>
    <section id='about' style='height: 600px'><h2>About</h2></section>
    <section id='projects' style='height: 600px'>
      <div class='project-card' id='card-1' style='height: 250px'>Card one</div>
      <div class='project-card' id='card-2' style='height: 250px'>Card two</div>
      <div class='project-card' id='card-3' style='height: 250px'>Card three</div>
    </section>
    <section id='contact' style='height: 600px'>
      <form>
        <div class='form-group'><input id='email' type='email'></div>
        <div class='form-group'><textarea id='message'></textarea></div>
        <button type='submit'>Send Message</button>
      </form>
    </section>
    <div class='banner' style='height: 200px'></div>
    "#
}

// Stack layout for the page above, viewport 800px:
// nav 0..80, #about 80..680, #projects 680..1280 (cards at 680/930/1180),
// #contact 1280..1880, .banner 1880..2080, scroll-to-top button 2080..2280.
fn page() -> Result<Page> {
    Page::from_html(portfolio_html())
}

#[test]
fn document_uses_stack_layout() -> Result<()> {
    let page = page()?;
    assert_eq!(page.document_height(), 2280);
    assert_eq!(page.viewport_height(), 800);
    assert_eq!(page.scroll_offset(), 0);
    Ok(())
}

#[test]
fn scroll_clamps_to_document_height() -> Result<()> {
    let mut page = page()?;
    page.scroll_to(99_999)?;
    assert_eq!(page.scroll_offset(), 1480);
    page.scroll_to(-50)?;
    assert_eq!(page.scroll_offset(), 0);
    Ok(())
}

#[test]
fn unsupported_selector_is_rejected() -> Result<()> {
    let page = page()?;
    assert!(matches!(
        page.count("div:hover"),
        Err(Error::UnsupportedSelector(_))
    ));
    assert!(matches!(
        page.count(""),
        Err(Error::UnsupportedSelector(_))
    ));
    Ok(())
}

#[test]
fn missing_target_reports_selector_not_found() -> Result<()> {
    let page = page()?;
    assert!(matches!(
        page.text_of("#no-such-node"),
        Err(Error::SelectorNotFound(_))
    ));
    Ok(())
}

#[test]
fn type_text_rejects_non_form_elements() -> Result<()> {
    let mut page = page()?;
    assert!(matches!(
        page.type_text("#about", "hello"),
        Err(Error::TypeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn validating_setters_reject_zero() -> Result<()> {
    let mut page = page()?;
    assert!(page.set_trace_log_limit(0).is_err());
    assert!(page.set_timer_step_limit(0).is_err());
    assert!(page.set_viewport_height(0).is_err());
    assert!(page.advance_time(-1).is_err());
    Ok(())
}

#[test]
fn init_skips_features_whose_elements_are_missing() -> Result<()> {
    let page = Page::from_html("<p id='solo'>hello</p>")?;
    assert!(!page.exists(".menu-toggle")?);
    assert!(!page.exists(".error-message")?);
    // The floating button needs no page structure at all.
    assert!(page.exists(".scroll-to-top")?);
    Ok(())
}

#[test]
fn trace_captures_scroll_events() -> Result<()> {
    let mut page = page()?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    page.scroll_to(300)?;
    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line == "[event] scroll offset=300"));
    Ok(())
}

#[test]
fn trace_log_limit_drops_oldest_lines() -> Result<()> {
    let mut page = page()?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    page.set_trace_log_limit(2)?;
    page.scroll_to(300)?;
    page.scroll_to(600)?;
    page.scroll_to(900)?;
    let logs = page.take_trace_logs();
    assert!(logs.len() <= 2);
    Ok(())
}
