//! Global CSS styles for AetherLab.
//!
//! Palette and motion variables come from [`super::root_variables`]; this
//! sheet only refers to them.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography === */
:root {
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.5rem;

  --radius-card: 28px;
  --radius-pill: 999px;
  --nav-height: 72px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  cursor: none;
}

a {
  color: inherit;
  text-decoration: none;
}

img, video {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: none;
}

:focus-visible {
  outline: 2px solid var(--lavender);
  outline-offset: 3px;
}

/* === Site Shell === */
.site {
  position: relative;
  min-height: 100vh;
  isolation: isolate;
}

.site-main {
  position: relative;
  z-index: 1;
  padding-top: var(--nav-height);
}

.site-footer {
  position: relative;
  z-index: 1;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  padding: 3rem clamp(1.5rem, 5vw, 4rem);
  border-top: 1px solid var(--ink-border);
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.footer-links {
  display: flex;
  gap: 1.5rem;
}

.footer-link {
  color: var(--text-secondary);
  transition: color var(--d-160) var(--ease-standard);
}

.footer-link:hover,
.footer-link:focus-visible {
  color: var(--lavender);
}

.footer-muted,
.muted {
  color: var(--text-muted);
}

.page {
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
  padding: 4rem clamp(1.5rem, 5vw, 2.5rem) 6rem;
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.panel {
  border: 1px solid var(--ink-border);
  border-radius: var(--radius-card);
  background: rgba(13, 11, 24, 0.6);
  padding: 2rem;
  backdrop-filter: blur(12px);
}

.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--ink-border);
  border-radius: var(--radius-pill);
  font-size: var(--text-xs);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

/* === Headings === */
.page-hero {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.page-eyebrow,
.section-eyebrow,
.hero-eyebrow,
.menu-eyebrow,
.drawer-eyebrow,
.empty-eyebrow,
.case-next-eyebrow {
  font-family: var(--font-display);
  font-size: var(--text-xs);
  letter-spacing: 0.32em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.page-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, var(--text-3xl));
  font-weight: 500;
  line-height: 1.1;
  color: var(--text-primary);
}

.page-lede,
.section-lede {
  max-width: 44rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 500;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: var(--font-display);
  font-size: var(--text-xs);
  letter-spacing: 0.28em;
  text-transform: uppercase;
  transition: background var(--d-160) var(--ease-standard),
    color var(--d-160) var(--ease-standard),
    border-color var(--d-160) var(--ease-standard);
}

.btn-primary {
  padding: 0.85rem 1.4rem;
  border-radius: var(--radius-pill);
  background: var(--lavender);
  color: var(--ink);
}

.btn-primary:hover {
  box-shadow: 0 0 24px var(--lavender-glow);
}

.btn-ghost {
  padding: 0.85rem 1.4rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--ink-border);
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--lavender);
}

.btn-link {
  padding: 0.25rem 0;
  color: var(--lavender);
}

.btn-primary:disabled,
.btn-ghost:disabled {
  opacity: 0.5;
  pointer-events: none;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  font-size: var(--text-lg);
  transition: border-color var(--d-160) var(--ease-standard);
}

.icon-btn:hover {
  border-color: var(--lavender);
}

/* === Chips, Tags, Pills === */
.metric-chip {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.9rem 1.1rem;
  border: 1px solid var(--ink-border);
  border-radius: 18px;
  background: var(--ink-raised);
}

.metric-label {
  font-size: var(--text-xs);
  letter-spacing: 0.24em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.metric-value {
  font-family: var(--font-display);
  font-size: var(--text-lg);
}

.chip-row,
.case-outcomes {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.tag {
  padding: 0.2rem 0.7rem;
  border: 1px solid rgba(198, 183, 255, 0.4);
  border-radius: var(--radius-pill);
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--lavender);
}

.filter-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  padding: 0.5rem 1rem;
  border: 1px solid var(--ink-border);
  border-radius: var(--radius-pill);
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: all var(--d-160) var(--ease-standard);
}

.pill.selected {
  border-color: var(--lavender);
  background: rgba(198, 183, 255, 0.12);
  color: var(--text-primary);
}

/* === Nav Bar === */
.nav-sentinel {
  position: absolute;
  top: 0;
  height: 24px;
  width: 1px;
}

.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  padding: 0 clamp(1.5rem, 5vw, 4rem);
  background: linear-gradient(to bottom, rgba(5, 4, 10, 0.92), rgba(5, 4, 10, 0));
  transition: transform var(--t-out-duration) var(--ease-t-out);
}

.nav-bar.nav-hidden {
  transform: translateY(-100%);
  transition: transform var(--t-in-duration) var(--ease-t-in);
}

.nav-logo {
  display: inline-flex;
  align-items: center;
  gap: 0.6rem;
  font-family: var(--font-display);
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.logo-mark {
  color: var(--lavender);
  font-size: var(--text-xl);
}

.nav-links {
  display: flex;
  gap: 1.75rem;
}

.nav-link {
  position: relative;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: color var(--d-160) var(--ease-standard);
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 1px;
  background: var(--lavender);
  transform: scaleX(0);
  transform-origin: left;
  transition: transform var(--d-240) var(--ease-calm);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

.nav-link.active::after {
  transform: scaleX(1);
}

.nav-menu-toggle {
  position: relative;
  z-index: 60;
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-xs);
  letter-spacing: 0.3em;
  text-transform: uppercase;
}

.menu-toggle-icon {
  position: relative;
  width: 22px;
  height: 10px;
  border-top: 1px solid currentColor;
  border-bottom: 1px solid currentColor;
  transition: transform var(--d-240) var(--ease-calm);
}

.nav-menu-toggle.open .menu-toggle-icon {
  transform: rotate(90deg);
}

/* === Menu Overlay === */
.menu-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--ink-raised);
  pointer-events: none;
  visibility: hidden;
  transition:
    clip-path var(--t-snap-duration) var(--ease-t-snap),
    visibility 0s linear var(--t-snap-duration);
}

.menu-overlay.open {
  pointer-events: auto;
  visibility: visible;
  transition: clip-path var(--t-snap-duration) var(--ease-t-snap);
}

.menu-content {
  width: min(48rem, 90vw);
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.menu-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.menu-item {
  width: 100%;
  display: grid;
  grid-template-columns: 3rem 1fr;
  grid-template-rows: auto auto;
  column-gap: 1rem;
  padding: 0.9rem 0;
  border-bottom: 1px solid var(--ink-border);
  text-align: left;
}

.menu-item-index {
  grid-row: span 2;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.menu-item-label {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  transition: color var(--d-160) var(--ease-standard);
}

.menu-item-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.menu-item:hover .menu-item-label,
.menu-item:focus-visible .menu-item-label,
.menu-item.current .menu-item-label {
  color: var(--lavender);
}

.menu-footnote {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Contact Drawer === */
.drawer-root {
  position: fixed;
  inset: 0;
  z-index: 70;
  pointer-events: none;
  visibility: hidden;
  transition: visibility 0s linear var(--t-out-duration);
}

.drawer-root.open {
  pointer-events: auto;
  visibility: visible;
  transition: none;
}

.drawer-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(5, 4, 10, 0.72);
}

.drawer-sheet {
  position: absolute;
  left: 50%;
  bottom: 0;
  width: min(40rem, 100vw);
  margin-left: calc(min(40rem, 100vw) / -2);
  max-height: 90vh;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2rem;
  border: 1px solid var(--ink-border);
  border-bottom: none;
  border-radius: var(--radius-card) var(--radius-card) 0 0;
  background: var(--ink-raised);
}

.drawer-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
}

.drawer-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 500;
}

.drawer-sent {
  padding: 0.75rem 1rem;
  border-radius: 14px;
  background: rgba(127, 224, 194, 0.12);
  color: var(--success);
}

.drawer-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.drawer-hint {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.drawer-hint.hint-warning {
  color: var(--warning);
}

.drawer-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  font-size: var(--text-xs);
  letter-spacing: 0.24em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.input-field,
.textarea {
  width: 100%;
  padding: 0.8rem 1rem;
  border: 1px solid var(--ink-border);
  border-radius: 14px;
  background: var(--ink);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--d-160) var(--ease-standard);
}

.textarea {
  resize: vertical;
}

.input-field:focus,
.textarea:focus {
  outline: none;
  border-color: var(--lavender);
}

.input-field[aria-invalid="true"],
.textarea[aria-invalid="true"] {
  border-color: var(--warning);
}

.input-counter {
  align-self: flex-end;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.input-counter.hint-warning {
  color: var(--warning);
}

/* === Custom Cursor === */
.cursor-ring {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 100;
  border: 1px solid var(--lavender);
  border-radius: 50%;
  pointer-events: none;
  mix-blend-mode: difference;
  transition: width var(--d-160) var(--ease-standard),
    height var(--d-160) var(--ease-standard),
    opacity var(--d-160) var(--ease-standard);
}

.cursor-ring.cursor-hover {
  background: var(--lavender-glow);
}

.cursor-ring.cursor-drag {
  border-style: dashed;
}

.cursor-ring.cursor-reduced {
  transition: none;
}

/* === Starfield === */
.starfield {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
  transition: transform var(--d-400) var(--ease-calm);
}

.star-layer {
  position: absolute;
  top: 0;
  left: 0;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: var(--star);
  animation-name: twinkle;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

.star-layer.still .star {
  animation: none;
}

@keyframes twinkle {
  from { opacity: var(--alpha-low); }
  to { opacity: var(--alpha-high); }
}

/* === Home === */
.home {
  display: flex;
  flex-direction: column;
  gap: 6rem;
  padding-bottom: 8rem;
}

.home-section {
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 clamp(1.5rem, 5vw, 2.5rem);
  scroll-margin-top: 7rem;
}

.portfolio-hero {
  min-height: calc(100vh - var(--nav-height));
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  align-items: center;
  gap: 3rem;
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 clamp(1.5rem, 5vw, 2.5rem);
  scroll-margin-top: 7rem;
}

.hero-copy {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  font-weight: 500;
  line-height: 1.05;
}

.hero-lede {
  max-width: 34rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.hero-tiles {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.hero-tile,
.lab-card {
  transition: transform var(--d-240) var(--ease-calm);
  will-change: transform;
}

.hero-tile {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  min-height: 10rem;
  padding: 1.25rem;
  border: 1px solid var(--ink-border);
  border-radius: 24px;
  background: rgba(13, 11, 24, 0.7);
}

.hero-tile:nth-child(even) {
  margin-top: 2.5rem;
}

.hero-tile-title {
  font-family: var(--font-display);
}

.hero-tile-caption {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.approach {
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: 3rem;
}

.approach-panel {
  padding: 2rem;
  border: 1px solid var(--ink-border);
  border-radius: 32px;
  background: rgba(5, 4, 10, 0.6);
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.practice-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.practice-list li {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.practice-dot {
  width: 8px;
  height: 8px;
  flex-shrink: 0;
  border-radius: 50%;
  background: var(--lavender);
}

.capability-grid {
  display: grid;
  gap: 1rem;
}

.capability-card {
  padding: 1.5rem;
  border: 1px solid var(--ink-border);
  border-radius: 24px;
  background: rgba(5, 4, 10, 0.4);
}

.capability-card p {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.lab {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.lab-heading {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.lab-board {
  display: grid;
  gap: 1rem;
}

.lab-card {
  display: grid;
  gap: 1rem;
  padding: 1.5rem;
  border: 1px solid var(--ink-border);
  border-radius: 32px;
  background: rgba(5, 4, 10, 0.5);
}

.lab-card:hover {
  border-color: var(--lavender);
}

.lab-card-header {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  font-family: var(--font-display);
}

.lab-card-year {
  padding: 0.2rem 0.75rem;
  border: 1px solid var(--ink-border);
  border-radius: var(--radius-pill);
  font-size: var(--text-xs);
  letter-spacing: 0.3em;
}

.lab-card p {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.lab-card-cta {
  font-size: var(--text-xs);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--lavender);
}

/* === Work Index === */
.work-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: 1.5rem;
}

.work-card-inner {
  height: 100%;
  border: 1px solid var(--ink-border);
  border-radius: var(--radius-card);
  background: var(--ink-raised);
  overflow: hidden;
  transition: transform var(--d-240) var(--ease-calm),
    border-color var(--d-160) var(--ease-standard);
  transform-style: preserve-3d;
}

.work-card-inner:hover {
  border-color: var(--lavender);
}

.work-card-link {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.work-card-media img {
  width: 100%;
  aspect-ratio: 16 / 10;
  object-fit: cover;
}

.work-card-body {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  padding: 1.5rem;
}

.work-card-meta {
  font-size: var(--text-xs);
  letter-spacing: 0.24em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.work-card-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 500;
}

.work-card-summary,
.work-empty {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Case Study === */
.case-header {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.case-role {
  color: var(--lavender);
}

.case-hero {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.case-hero img,
.case-hero video {
  width: 100%;
  border-radius: var(--radius-card);
  object-fit: cover;
}

.case-hero figcaption,
.reel-clip figcaption {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.case-body {
  max-width: 44rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  color: var(--text-secondary);
}

.case-body h2,
.case-body h3 {
  font-family: var(--font-display);
  font-weight: 500;
  color: var(--text-primary);
}

.case-body a {
  color: var(--lavender);
  text-decoration: underline;
}

.case-body table {
  border-collapse: collapse;
}

.case-body th,
.case-body td {
  padding: 0.4rem 0.8rem;
  border: 1px solid var(--ink-border);
}

.case-credits dl {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
  margin-top: 1rem;
}

.credit dt {
  font-size: var(--text-xs);
  letter-spacing: 0.24em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.credit-note {
  color: var(--text-muted);
}

.case-next {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding-top: 2rem;
  border-top: 1px solid var(--ink-border);
}

.case-next-link {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.case-next-link img {
  width: 8rem;
  border-radius: 16px;
}

.case-next-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
}

.case-next-meta {
  color: var(--text-muted);
}

/* === Motion Score === */
.motion-score {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.motion-notes {
  color: var(--text-secondary);
}

.motion-preview {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.motion-rail {
  position: relative;
  flex: 1;
  height: 2px;
  background: var(--ink-border);
}

.motion-dot {
  position: absolute;
  top: -7px;
  left: 0;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--lavender);
  box-shadow: 0 0 16px var(--lavender-glow);
}

/* === Process Reel === */
.process-reel {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.reel-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.reel-controls {
  display: flex;
  gap: 0.5rem;
}

.reel-window {
  overflow: hidden;
  border-radius: var(--radius-card);
}

.reel-track {
  display: inline-flex;
  gap: 1rem;
  will-change: transform;
}

.reel-clip {
  flex: 0 0 auto;
  width: 20rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.reel-clip img,
.reel-clip video {
  width: 100%;
  aspect-ratio: 4 / 3;
  border-radius: 20px;
  object-fit: cover;
}

/* === Resume / About === */
.resume-actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
}

.resume-roles,
.about-grid {
  display: grid;
  gap: 1.5rem;
}

.resume-timeline {
  list-style: none;
}

.resume-timeline summary {
  list-style: none;
  cursor: pointer;
}

.resume-timeline summary::-webkit-details-marker {
  display: none;
}

.resume-timeline details[open] .resume-highlights {
  margin-top: 1rem;
}

.resume-role-header {
  display: flex;
  flex-wrap: wrap;
  align-items: baseline;
  justify-content: space-between;
  gap: 0.5rem;
}

.resume-role h2,
.panel h2,
.panel h3 {
  font-family: var(--font-display);
  font-weight: 500;
  margin-bottom: 0.75rem;
}

.resume-company {
  font-size: var(--text-sm);
  letter-spacing: 0.28em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.resume-highlights {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding-left: 1.25rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.resume-columns {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.resume-recognition ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.resume-recognition li {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 0.5rem;
}

.about-grid .panel p {
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

/* === Empty States === */
.empty-state,
.not-found {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  text-align: center;
}

.empty-heading {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 500;
}

.empty-description {
  max-width: 32rem;
  color: var(--text-secondary);
}

/* === Responsive === */
@media (max-width: 860px) {
  .portfolio-hero,
  .approach,
  .resume-columns {
    grid-template-columns: 1fr;
  }

  .nav-links {
    display: none;
  }

  .hero-tile:nth-child(even) {
    margin-top: 0;
  }
}

@media (pointer: coarse) {
  body,
  button {
    cursor: auto;
  }

  .cursor-ring {
    display: none;
  }
}

/* === Print === */
@page {
  size: auto;
  margin: 1in;
}

@media print {
  body {
    background: #ffffff !important;
    color: #000000 !important;
  }

  .starfield,
  .cursor-ring,
  .nav-bar,
  .site-footer,
  .resume-actions,
  .menu-overlay,
  .drawer-root {
    display: none !important;
  }

  .resume-page * {
    background: transparent !important;
    box-shadow: none !important;
    color: #000000 !important;
    border-color: rgba(0, 0, 0, 0.3) !important;
  }

  .resume-columns {
    display: block !important;
  }
}

/* === Reduced Motion === */
.reduced-motion *,
.reduced-motion *::before,
.reduced-motion *::after {
  scroll-behavior: auto !important;
}

@media (prefers-reduced-motion: reduce) {
  html {
    scroll-behavior: auto;
  }

  .star {
    animation: none;
  }
}
"#;
