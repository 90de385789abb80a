//! Stylesheet for the form components.
//!
//! Geometry and behavior only: palette colors are injected inline per
//! theme, so one sheet serves every theme. Inject once per document,
//! typically next to the app's global styles.

pub const COMPONENT_STYLES: &str = r#"
/* === Form Field === */
.form-field {
  margin-bottom: 10px;
}

.form-label {
  display: block;
  margin-bottom: 10px;
  font-size: 14px;
  font-weight: 600;
}

.form-field-wrap {
  position: relative;
}

.form-input {
  width: 100%;
  height: 48px;
  font-size: 16px;
  padding: 14px;
  border: 1px solid;
  border-radius: 2px;
  box-sizing: border-box;
  outline: none;
  font-family: inherit;
}

.form-input::placeholder {
  color: inherit;
  opacity: 0.55;
}

.form-input:focus {
  border-width: 2px;
  padding: 13px;
}

.form-input:disabled {
  opacity: 0.5;
}

/* Room for the pinned accessories. */
.form-input-icon-left {
  padding-left: 45px;
}

.form-input-icon-right {
  padding-right: 45px;
}

.form-input-icon-left:focus {
  padding-left: 44px;
}

.form-input-icon-right:focus {
  padding-right: 44px;
}

/* === Accessories === */
.form-accessory {
  position: absolute;
  top: 14px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.form-accessory-left {
  left: 15px;
}

.form-accessory-right {
  right: 15px;
}

.form-error {
  text-align: center;
  padding-top: 5px;
  margin: 0;
  font-size: 14px;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-danger {
  font-family: inherit;
  font-size: 15px;
  padding: 12px 20px;
  border: 1px solid transparent;
  border-radius: 2px;
  cursor: pointer;
}

.btn-primary:disabled,
.btn-ghost:disabled,
.btn-danger:disabled {
  opacity: 0.5;
  cursor: default;
}

.btn-primary {
  background: #1d74f5;
  color: #ffffff;
}

.btn-ghost {
  background: transparent;
  border-color: currentColor;
  color: inherit;
}

.btn-danger {
  background: #f5455c;
  color: #ffffff;
}

.icon-btn {
  background: none;
  border: none;
  padding: 0;
  margin: 0;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Spinner === */
.spinner {
  display: inline-block;
  width: 18px;
  height: 18px;
  border: 2px solid rgba(128, 128, 128, 0.25);
  border-radius: 50%;
  animation: form-spin 0.8s linear infinite;
}

@keyframes form-spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

/* === Bottom Sheet Host === */
.bottom-sheet-input {
  width: 100%;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_covers_the_component_classes() {
        for class in [
            ".form-field",
            ".form-label",
            ".form-field-wrap",
            ".form-input",
            ".form-input-icon-left",
            ".form-input-icon-right",
            ".form-accessory",
            ".form-accessory-left",
            ".form-accessory-right",
            ".form-error",
            ".btn-primary",
            ".btn-ghost",
            ".btn-danger",
            ".icon-btn",
            ".spinner",
            ".bottom-sheet-input",
        ] {
            assert!(COMPONENT_STYLES.contains(class), "missing {class}");
        }
    }
}
