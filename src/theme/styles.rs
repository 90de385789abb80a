//! Global CSS styles for the Fieldwork gallery.
//!
//! Chrome and layout only. Everything color-sensitive is painted inline
//! from the active palette so the whole window follows the theme picker.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
  line-height: 1.5;
  min-height: 100vh;
}

/* === Shell === */
.gallery-shell {
  min-height: 100vh;
  padding-bottom: 48px;
}

.top-nav {
  display: flex;
  align-items: center;
  gap: 18px;
  padding: 14px 24px;
  border-bottom: 1px solid;
  margin-bottom: 24px;
}

.nav-title {
  font-size: 18px;
  font-weight: 700;
  margin-right: auto;
}

.nav-link {
  text-decoration: none;
  font-size: 14px;
  color: inherit;
  opacity: 0.7;
}

.nav-link:hover {
  opacity: 1;
}

.nav-link-active {
  opacity: 1;
  font-weight: 600;
  text-decoration: underline;
}

/* === Pages === */
.page {
  max-width: 560px;
  margin: 0 auto;
  padding: 0 24px;
}

.page-title {
  font-size: 24px;
  font-weight: 700;
  margin-bottom: 6px;
}

.page-subtitle {
  font-size: 14px;
  opacity: 0.7;
  margin-bottom: 28px;
}

.section {
  margin-bottom: 36px;
}

.section-title {
  font-size: 13px;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  opacity: 0.6;
  margin-bottom: 14px;
}

.demo-row {
  display: flex;
  gap: 12px;
  align-items: center;
  margin-top: 10px;
}

.input-hint {
  position: absolute;
  right: 15px;
  top: 16px;
  font-size: 11px;
  letter-spacing: 0.08em;
  opacity: 0.5;
  pointer-events: none;
}

/* === Theme Picker === */
.theme-picker {
  display: flex;
  gap: 8px;
}

.theme-pill {
  font-family: inherit;
  font-size: 13px;
  padding: 6px 14px;
  border: 1px solid;
  border-radius: 999px;
  background: transparent;
  color: inherit;
  cursor: pointer;
  opacity: 0.7;
}

.theme-pill-active {
  opacity: 1;
  font-weight: 600;
}

/* === Bottom Sheet === */
.sheet-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  display: flex;
  align-items: flex-end;
  z-index: 10;
}

.sheet {
  width: 100%;
  border-radius: 12px 12px 0 0;
  padding: 12px 24px 32px;
  animation: sheet-rise 200ms ease;
}

@keyframes sheet-rise {
  from { transform: translateY(40px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

.sheet-handle {
  width: 36px;
  height: 4px;
  border-radius: 2px;
  margin: 0 auto 16px;
  opacity: 0.4;
  background: currentColor;
}

.sheet-title {
  font-size: 16px;
  font-weight: 600;
  margin-bottom: 14px;
}
"#;
