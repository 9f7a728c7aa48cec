//! Embedded static assets.

/// Route at which the scroll script is served.
pub const SCROLL_SCRIPT_ROUTE: &str = "/assets/scroll-to-hash.js";

/// Scroll-to-hash helper shipped with every page shell.
///
/// Polls for the hash target on load and on hashchange: 100 ms interval,
/// at most 10 attempts, then gives up silently. Anchored sections may be
/// injected after first paint, hence the retry loop. Rapid re-triggers can
/// overlap polling loops; attempts are never cancelled.
pub const SCROLL_TO_HASH_JS: &str = r#"(function () {
  function scrollToHash() {
    var hash = window.location.hash;
    if (!hash) return;
    var id = hash.substring(1);

    var attempts = 0;
    var maxAttempts = 10;

    function tryScroll() {
      var element = document.getElementById(id);
      if (element) {
        setTimeout(function () {
          element.scrollIntoView({ behavior: 'smooth', block: 'start' });
        }, 0);
      } else if (attempts < maxAttempts) {
        attempts++;
        setTimeout(tryScroll, 100);
      }
    }

    tryScroll();
  }

  window.addEventListener('DOMContentLoaded', scrollToHash);
  window.addEventListener('hashchange', scrollToHash);
})();
"#;
