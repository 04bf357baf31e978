//! Global CSS styles for Software Engineer Wrap.
//!
//! Dark app chrome around a 9:16 card; per-theme colors are inlined by the
//! card component.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #09090b;
  --surface-raised: #18181b;
  --surface-border: #27272a;

  /* Accent */
  --accent: #22c55e;
  --accent-glow: rgba(34, 197, 94, 0.3);

  /* Text */
  --text-primary: #fafafa;
  --text-secondary: rgba(250, 250, 250, 0.7);
  --text-muted: rgba(250, 250, 250, 0.5);

  /* Semantic */
  --danger: #ef4444;
  --success: #22c55e;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Typography === */
.eyebrow {
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
  color: var(--text-secondary);
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  letter-spacing: 0.05em;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  margin: 1.25rem 0 0.75rem;
}

.tagline, .body-text {
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost {
  font: inherit;
  font-weight: 600;
  border-radius: 8px;
  padding: 0.7rem 1.4rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #000;
  border: none;
  box-shadow: 0 0 20px var(--accent-glow);
}

.btn-secondary {
  background: var(--surface-raised);
  color: var(--text-primary);
  border: 1px solid var(--surface-border);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid transparent;
}

.btn-primary:hover, .btn-secondary:hover { transform: translateY(-1px); }
.btn-ghost:hover { color: var(--text-primary); }
button:disabled { opacity: 0.5; cursor: wait; }

/* === Landing === */
.landing {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  min-height: 100vh;
  padding: 2rem;
  text-align: center;
}

.landing-header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.period-picker {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 100%;
  max-width: 360px;
}

.segmented {
  display: grid;
  grid-template-columns: 1fr 1fr;
  background: var(--surface-raised);
  border-radius: 8px;
  padding: 4px;
}

.segment {
  font: inherit;
  background: transparent;
  color: var(--text-secondary);
  border: none;
  border-radius: 6px;
  padding: 0.5rem;
  cursor: pointer;
}

.segment.active {
  background: var(--surface-border);
  color: var(--text-primary);
}

/* === Form === */
.create {
  max-width: 640px;
  margin: 0 auto;
  padding: 1.5rem;
}

.page-header {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.page-header .page-title { font-size: var(--text-2xl); }

.form-section {
  border-top: 1px solid var(--surface-border);
  margin-top: 1.25rem;
}

.field-row {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 0.9rem;
  text-align: left;
}

.field-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.field-input {
  font: inherit;
  background: var(--surface-raised);
  color: var(--text-primary);
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  padding: 0.55rem 0.75rem;
}

.field-input:focus {
  outline: none;
  border-color: var(--accent);
}

.stat-inputs {
  display: grid;
  grid-template-columns: 1fr 1fr;
  column-gap: 1rem;
}

.wrap-form > .btn-primary {
  width: 100%;
  margin: 2rem 0;
}

/* === Chips === */
.chip-group {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.chip {
  font: inherit;
  font-size: var(--text-sm);
  background: var(--surface-raised);
  color: var(--text-secondary);
  border: 1px solid var(--surface-border);
  border-radius: 999px;
  padding: 0.3rem 0.9rem;
  cursor: pointer;
}

.chip.active {
  color: #000;
  background: var(--accent);
  border-color: var(--accent);
}

/* === Personality === */
.personality-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 0.75rem;
}

.personality-option {
  font: inherit;
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
  text-align: left;
  background: var(--surface-raised);
  color: var(--text-primary);
  border: 2px solid var(--surface-border);
  border-radius: 10px;
  padding: 0.6rem;
  cursor: pointer;
}

.personality-option.active { box-shadow: 0 0 12px rgba(255, 255, 255, 0.08); }

.personality-swatch {
  height: 48px;
  border-radius: 6px;
}

.personality-name { font-weight: 600; }
.personality-desc, .personality-colors { font-size: var(--text-xs); color: var(--text-muted); }

/* === Background === */
.background-selector {
  display: flex;
  flex-direction: column;
}

.template-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
}

.template-option {
  font: inherit;
  height: 90px;
  border-radius: 8px;
  border: 2px solid var(--surface-border);
  background-color: var(--surface-raised);
  background-size: cover;
  background-position: center;
  color: var(--text-primary);
  display: flex;
  align-items: flex-end;
  padding: 0.4rem;
  cursor: pointer;
}

.template-option.active { border-color: var(--accent); }

.template-name {
  font-size: var(--text-xs);
  background: rgba(0, 0, 0, 0.6);
  border-radius: 4px;
  padding: 0.1rem 0.4rem;
}

.upload-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 0.9rem;
}

.upload-preview {
  width: 36px;
  height: 64px;
  border-radius: 4px;
  background-size: cover;
  background-position: center;
}

/* === Wrap Page === */
.wrap-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  padding: 1.5rem;
}

.wrap-actions {
  display: flex;
  gap: 0.75rem;
}

/* === Card (540 x 960 design size) === */
.wrap-card {
  position: relative;
  width: min(540px, 90vw);
  aspect-ratio: 9 / 16;
  border-radius: 16px;
  overflow: hidden;
  color: #fafafa;
}

.card-bg {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

.card-overlay {
  position: absolute;
  inset: 0;
}

.card-content {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  padding: 7% 7% 6%;
}

.card-header { text-align: center; }

.card-title {
  font-size: var(--text-sm);
  letter-spacing: 0.35em;
  color: rgba(250, 250, 250, 0.8);
}

.card-wordmark {
  font-size: 3.2rem;
  font-weight: 900;
  line-height: 1.1;
}

.card-month {
  font-size: var(--text-xl);
  font-weight: 700;
  letter-spacing: 0.2em;
}

.card-tagline {
  font-style: italic;
  color: rgba(250, 250, 250, 0.7);
}

.stat-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem 1.5rem;
  margin-top: 1.75rem;
}

.stat-item {
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
  min-width: 0;
}

.stat-label {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-size: 0.65rem;
  letter-spacing: 0.1em;
  color: rgba(250, 250, 250, 0.6);
}

.stat-glyph {
  font-size: 0.9rem;
  line-height: 1;
}

.stat-value {
  font-family: var(--font-mono);
  font-size: 1.9rem;
  font-weight: 800;
}

.stat-text { font-size: 1.4rem; }

.icon-strip { margin-top: 1.25rem; }

.strip-caption {
  font-size: 0.65rem;
  letter-spacing: 0.1em;
  color: rgba(250, 250, 250, 0.6);
}

.strip-icons {
  display: flex;
  gap: 0.8rem;
  margin-top: 0.4rem;
}

.strip-icon {
  width: 40px;
  height: 40px;
}

.card-footer {
  margin-top: auto;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  border-top: 1px solid rgba(250, 250, 250, 0.15);
  padding-top: 0.9rem;
}

.footer-name { font-weight: 700; }
.footer-role, .footer-company { font-size: var(--text-sm); color: rgba(250, 250, 250, 0.7); }
.footer-theme { text-align: right; font-weight: 700; }
.footer-caption { font-size: 0.6rem; letter-spacing: 0.2em; color: rgba(250, 250, 250, 0.5); }

/* === Share Popup === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.modal {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 12px;
  padding: 1.5rem;
  width: min(420px, 90vw);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.share-popup { max-height: 90vh; overflow-y: auto; }

.modal-header {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.modal-header .section-header { margin: 0; }

.share-targets {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.share-target {
  font: inherit;
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  padding: 0.6rem;
  cursor: pointer;
}

.share-target:hover { border-color: var(--accent); }

.share-steps {
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

.share-steps li { margin-bottom: 0.4rem; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}

.toast {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
  min-width: 260px;
  max-width: 360px;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  padding: 0.75rem 1rem;
  animation: toast-in var(--transition-normal);
}

.toast-success { border-color: var(--success); }
.toast-destructive { border-color: var(--danger); background: #2a0f12; }

.toast-body { flex: 1; }
.toast-title { font-weight: 600; }
.toast-description { font-size: var(--text-sm); color: var(--text-secondary); }

.toast-close {
  font: inherit;
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
