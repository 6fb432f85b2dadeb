//! Landing-page controller walkthrough.
//!
//! Drives the coordination core on the headless surface the way the landing
//! page controller does in the app: open the login dialog, trap focus, take
//! an API outcome, and surface it as a toast.
//!
//! Run: `cargo run -p lui --example landing`

use std::time::Duration;

use lui::prelude::*;
use lui::{ApiMessages, ConfirmOptions, Modifiers};

const FRAME: Duration = Duration::from_millis(100);

fn main() {
    let mut surface = HeadlessSurface::new();
    surface.insert_page_target(1); // "Log in" button in the navbar
    surface.insert_view("loginModal", vec![10, 11, 12]); // email, password, submit
    surface.set_focus(1);
    surface.set_scroll_offset(240);

    let mut ctx = UiContext::new(surface);
    ctx.modals_mut().register(Modal::new("loginModal"));

    // User clicks "Log in".
    ctx.modals_mut().open("loginModal");
    println!("open stack: {:?}", ctx.modals().open_ids());
    println!("scroll locked: {}", ctx.modals().surface().is_scroll_locked());

    // Three frames later the entrance transition completes and focus lands
    // on the email field.
    for _ in 0..3 {
        ctx.tick(FRAME);
    }
    println!("focused after open: {:?}", ctx.modals().surface().focused());

    // Tab cycles inside the dialog and wraps from the last field.
    let tab = Event::Key(KeyEvent::new(KeyCode::Tab));
    ctx.handle_event(&tab, None);
    ctx.handle_event(&tab, None);
    ctx.handle_event(&tab, None);
    println!("focused after 3 tabs: {:?}", ctx.modals().surface().focused());

    // Shift+Tab walks backwards.
    let shift_tab = Event::Key(KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT));
    ctx.handle_event(&shift_tab, None);
    println!("focused after shift-tab: {:?}", ctx.modals().surface().focused());

    // The login request succeeds: close the dialog, toast the result.
    ctx.modals_mut().close("loginModal", None);
    ctx.notifications_mut().show_api_result(
        &ApiResult::ok(),
        ApiMessages::default().success("Login successful! Redirecting..."),
    );
    for _ in 0..3 {
        ctx.tick(FRAME);
    }
    println!(
        "focus restored to trigger: {:?}, scroll locked: {}",
        ctx.modals().surface().focused(),
        ctx.modals().surface().is_scroll_locked()
    );
    for toast in ctx.notifications().visible() {
        println!("toast [{}] {}", toast.kind().as_str(), toast.message());
    }

    // A destructive action asks for confirmation; Escape dismisses it.
    let confirm = ctx.confirm(ConfirmOptions::default().message("Remove this friend?"));
    ctx.tick(FRAME * 3);
    let escape = Event::Key(KeyEvent::new(KeyCode::Escape));
    ctx.handle_event(&escape, None);
    ctx.tick(FRAME * 3);
    println!("confirm result: {:?}", confirm.result());
    println!("registered modals left: {}", ctx.modals().stats().registered);
}
