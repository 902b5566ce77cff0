//! Site stylesheet.
//!
//! Slate/blue dark theme with a light "paper" section for the white paper
//! viewer. Responsive breakpoints follow the usual 640/768/1024px steps.
//! The navigation bar reads two state classes:
//!
//! - `.site-nav.scrolled` - translucent background once the page scrolls
//! - `.nav-mobile.open` / `.nav-toggle-btn.open` - mobile menu expanded

/// Complete CSS for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-200: #e2e8f0;
    --slate-300: #cbd5e1;
    --slate-400: #94a3b8;
    --slate-500: #64748b;
    --slate-600: #475569;
    --slate-700: #334155;
    --slate-800: #1e293b;
    --slate-900: #0f172a;
    --slate-950: #020617;
    --blue-400: #60a5fa;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --blue-800: #1e40af;
    --blue-900: #1e3a8a;
    --indigo-500: #6366f1;
    --green-400: #4ade80;
    --green-500: #22c55e;
    --red-500: #ef4444;
    --yellow-500: #eab308;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    --font-serif: ui-serif, Georgia, Cambria, "Times New Roman", serif;
    --font-mono: ui-monospace, "JetBrains Mono", "Fira Code", monospace;
    --container-max: 80rem;
    --container-narrow: 56rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--slate-900);
    color: var(--slate-50);
    font-family: var(--font-sans);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--blue-500);
    color: #fff;
}

h1, h2, h3, h4, h5, p, ul, dl, dd {
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
    cursor: pointer;
}

.container,
.container-narrow {
    margin: 0 auto;
    padding: 0 1rem;
}

.container { max-width: var(--container-max); }
.container-narrow { max-width: var(--container-narrow); }

@media (min-width: 640px) {
    .container, .container-narrow { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container, .container-narrow { padding: 0 2rem; }
}

/* Icons */

.icon { width: 1.5rem; height: 1.5rem; }
.icon-md { width: 1.5rem; height: 1.5rem; }
.icon-sm { width: 1.25rem; height: 1.25rem; }
.icon-xs { width: 1rem; height: 1rem; }
.accent-blue { color: var(--blue-400); }
.accent-green { color: var(--green-400); }

/* Brand */

.brand, .nav-brand, .footer-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.brand-mark { width: 2rem; height: 2rem; color: var(--blue-500); }
.footer-brand .brand-mark { width: 1.5rem; height: 1.5rem; }

.brand-name {
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: #fff;
}

.footer-brand .brand-name { font-size: 1.125rem; }
.brand-accent { color: var(--blue-400); }

/* Navigation */

.site-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1.5rem 0;
    background: transparent;
    border-bottom: 1px solid transparent;
    transition: all 300ms ease;
}

.site-nav.scrolled {
    padding: 1rem 0;
    background: rgba(15, 23, 42, 0.95);
    backdrop-filter: blur(4px);
    border-bottom-color: var(--slate-700);
}

.nav-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-links { display: none; gap: 2rem; }

.nav-link {
    color: var(--slate-300);
    font-size: 0.875rem;
    font-weight: 500;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    transition: color 150ms ease;
}

.nav-link:hover { color: var(--blue-400); }

.nav-toggle-btn {
    display: flex;
    padding: 0;
    border: 0;
    background: none;
    color: var(--slate-300);
}

.nav-toggle-btn:hover { color: #fff; }
.nav-toggle-btn .icon-when-open { display: none; }
.nav-toggle-btn.open .icon-when-open { display: inline-flex; }
.nav-toggle-btn.open .icon-when-closed { display: none; }

.nav-mobile {
    display: none;
    background: var(--slate-900);
    border-bottom: 1px solid var(--slate-700);
}

.nav-mobile.open { display: block; }

.nav-mobile-inner { padding: 0.5rem 0.5rem 0.75rem; }

.nav-mobile-link {
    display: block;
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    color: var(--slate-300);
    font-weight: 500;
}

.nav-mobile-link:hover { color: #fff; background: var(--slate-800); }

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle { display: none; }
    .nav-mobile.open { display: none; }
}

/* Hero */

.hero {
    position: relative;
    overflow: hidden;
    padding: 8rem 0 5rem;
    background: var(--slate-900);
}

.hero-noise {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background-image:
        linear-gradient(rgba(148, 163, 184, 0.08) 1px, transparent 1px),
        linear-gradient(90deg, rgba(148, 163, 184, 0.08) 1px, transparent 1px);
    background-size: 32px 32px;
}

.hero-fade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(15, 23, 42, 0), rgba(15, 23, 42, 0.8), var(--slate-900));
}

.hero-inner { position: relative; z-index: 10; }

.hero-grid { display: grid; gap: 3rem; align-items: center; }

.hero-badge {
    display: inline-flex;
    align-items: center;
    margin-bottom: 1.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    border: 1px solid rgba(59, 130, 246, 0.3);
    background: rgba(59, 130, 246, 0.1);
    color: var(--blue-400);
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.025em;
    text-transform: uppercase;
}

.hero-badge-dot {
    width: 0.5rem;
    height: 0.5rem;
    margin-right: 0.5rem;
    border-radius: 9999px;
    background: var(--blue-500);
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.hero-title {
    margin-bottom: 1.5rem;
    font-size: 3rem;
    font-weight: 800;
    line-height: 1.15;
    letter-spacing: -0.025em;
    color: #fff;
}

.hero-title-accent {
    background: linear-gradient(to right, var(--blue-400), var(--indigo-500));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    max-width: 32rem;
    margin-bottom: 2rem;
    font-size: 1.25rem;
    line-height: 1.625;
    color: var(--slate-400);
}

.hero-actions { display: flex; flex-direction: column; gap: 1rem; }

.btn {
    display: inline-flex;
    justify-content: center;
    align-items: center;
    padding: 1rem 2rem;
    border-radius: 0.5rem;
    font-weight: 700;
    transition: all 150ms ease;
}

.btn-primary {
    border: 1px solid transparent;
    background: var(--blue-600);
    color: #fff;
    box-shadow: 0 10px 15px -3px rgba(30, 58, 138, 0.5);
}

.btn-primary:hover { background: var(--blue-700); }

.btn-secondary {
    border: 1px solid var(--slate-600);
    color: var(--slate-300);
}

.btn-secondary:hover { background: var(--slate-800); }
.btn-icon { margin-left: 0.5rem; }

.rack { position: relative; }

.rack-frame {
    position: relative;
    padding: 1.5rem;
    border-radius: 1rem;
    border: 1px solid var(--slate-700);
    background: linear-gradient(to bottom right, var(--slate-800), var(--slate-900));
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.rack-glow {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 0.25rem;
    background: linear-gradient(to right, var(--blue-500), var(--indigo-500), var(--blue-500));
}

.rack-nodes { display: grid; gap: 1rem; }

.rack-node {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 4rem;
    padding: 0 1rem;
    border-radius: 0.25rem;
    border: 1px solid var(--slate-800);
    background: var(--slate-950);
    transition: border-color 150ms ease;
}

.rack-node:hover { border-color: rgba(59, 130, 246, 0.5); }
.rack-node-status, .rack-node-ports { display: flex; align-items: center; gap: 1rem; }
.rack-node-ports { gap: 0.5rem; }

.rack-led {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: var(--green-500);
    box-shadow: 0 0 8px rgba(34, 197, 94, 0.5);
}

.rack-bar { width: 6rem; height: 0.5rem; border-radius: 0.25rem; background: var(--slate-800); }
.rack-port { width: 2rem; height: 0.25rem; border-radius: 0.25rem; background: rgba(30, 58, 138, 0.5); }

.rack-footer {
    display: flex;
    justify-content: space-between;
    margin-top: 1.5rem;
    padding-top: 1.5rem;
    border-top: 1px solid var(--slate-800);
    color: var(--slate-500);
    font-family: var(--font-mono);
    font-size: 0.75rem;
}

.rack-badge {
    position: absolute;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem;
    border-radius: 0.5rem;
    border: 1px solid var(--slate-700);
    background: var(--slate-800);
    color: #fff;
    font-weight: 700;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
}

.rack-badge-top { top: -1.5rem; right: -1.5rem; }
.rack-badge-bottom { bottom: -1.5rem; left: -1.5rem; }

@media (min-width: 640px) {
    .hero-actions { flex-direction: row; }
}

@media (min-width: 1024px) {
    .hero { padding: 12rem 0 8rem; }
    .hero-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
    .hero-title { font-size: 3.75rem; }
}

/* Section headers */

.section-header { margin-bottom: 4rem; text-align: center; }

.section-eyebrow {
    color: var(--blue-500);
    font-size: 1rem;
    font-weight: 600;
    letter-spacing: 0.025em;
    text-transform: uppercase;
}

.section-title {
    margin-top: 0.5rem;
    font-size: 1.875rem;
    font-weight: 800;
    letter-spacing: -0.025em;
    color: #fff;
}

.section-description {
    max-width: 42rem;
    margin: 1rem auto 0;
    font-size: 1.25rem;
    color: var(--slate-400);
}

@media (min-width: 640px) {
    .section-title { font-size: 2.25rem; }
}

/* Features */

.features { padding: 6rem 0; background: var(--slate-950); }

.features-grid { display: grid; gap: 2rem; }

.feature-card {
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid var(--slate-800);
    background: var(--slate-900);
    transition: all 150ms ease;
}

.feature-card:hover {
    border-color: rgba(59, 130, 246, 0.3);
    box-shadow: 0 25px 50px -12px rgba(30, 58, 138, 0.2);
}

.feature-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    margin-bottom: 1.5rem;
    border-radius: 0.5rem;
    border: 1px solid rgba(59, 130, 246, 0.2);
    background: rgba(30, 58, 138, 0.3);
}

.feature-title { margin-bottom: 0.75rem; font-size: 1.25rem; font-weight: 700; color: #fff; }
.feature-description { line-height: 1.625; color: var(--slate-400); }

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}

/* Specs */

.specs { padding: 6rem 0; background: var(--slate-900); border-top: 1px solid var(--slate-800); }
.specs-grid { display: grid; gap: 3rem; align-items: center; }
.specs-title { margin-bottom: 2rem; font-size: 1.875rem; font-weight: 800; color: #fff; }
.spec-list { display: grid; gap: 1.5rem; }

.spec-row {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--slate-800);
}

.spec-label { font-weight: 500; color: var(--slate-400); }
.spec-value { font-family: var(--font-mono); font-weight: 700; color: #fff; text-align: right; }

.terminal {
    overflow: hidden;
    padding: 0.5rem;
    border-radius: 0.5rem;
    border: 1px solid var(--slate-700);
    background: var(--slate-950);
    color: var(--green-400);
    font-family: var(--font-mono);
    font-size: 0.75rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.terminal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.5rem;
    padding: 0.5rem;
    border-radius: 0.25rem 0.25rem 0 0;
    background: var(--slate-800);
    color: var(--slate-400);
}

.terminal-dots { display: flex; gap: 0.25rem; }
.terminal-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.terminal-dot.red { background: var(--red-500); }
.terminal-dot.yellow { background: var(--yellow-500); }
.terminal-dot.green { background: var(--green-500); }

.terminal-body {
    display: grid;
    gap: 0.5rem;
    height: 16rem;
    overflow-y: auto;
    padding: 1rem;
}

.terminal-output { color: #fff; }
.terminal-indent { padding-left: 1rem; }
.terminal-ok { color: var(--green-500); font-weight: 700; }
.terminal-pass { color: var(--green-500); white-space: pre; }

@media (min-width: 1024px) {
    .specs-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
}

/* White paper */

.whitepaper {
    padding: 6rem 0;
    background: var(--slate-50);
    border-top: 1px solid var(--slate-200);
    color: var(--slate-900);
}

.whitepaper .section-header { margin-bottom: 3rem; }
.paper-heading { font-size: 1.875rem; font-weight: 800; color: var(--slate-900); }
.paper-lead { margin-top: 1rem; font-size: 1.125rem; color: var(--slate-600); }

.paper {
    overflow: hidden;
    border-radius: 0.5rem;
    border: 1px solid var(--slate-200);
    background: #fff;
    box-shadow: 0 25px 50px -12px var(--slate-200);
}

.paper-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem 2rem;
    border-bottom: 1px solid var(--slate-200);
    background: var(--slate-100);
}

.paper-kind { font-size: 1.125rem; font-weight: 700; color: var(--slate-800); }
.paper-ref { font-size: 0.875rem; color: var(--slate-500); }

.paper-download {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: 0;
    border-radius: 0.25rem;
    background: var(--blue-600);
    color: #fff;
    font-size: 0.875rem;
    font-weight: 500;
    transition: background 150ms ease;
}

.paper-download:hover { background: var(--blue-700); }

.paper-body { padding: 2rem; }

.paper-title-block {
    margin-bottom: 2rem;
    padding-bottom: 2rem;
    border-bottom: 2px solid var(--slate-100);
    text-align: center;
}

.paper-title { margin-bottom: 0.5rem; font-size: 1.875rem; font-weight: 700; color: var(--slate-900); }
.paper-subtitle { margin-bottom: 1.5rem; font-size: 1.25rem; font-weight: 500; color: var(--slate-700); }

.paper-meta {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    max-width: 32rem;
    margin: 0 auto;
    padding: 1.5rem;
    border-radius: 0.5rem;
    background: var(--slate-50);
    font-size: 0.875rem;
    text-align: left;
}

.paper-meta-field.wide { grid-column: span 2; }

.paper-meta-label {
    display: block;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    color: var(--slate-500);
}

.paper-meta-value { display: block; font-weight: 600; color: var(--slate-900); }

.paper-sections {
    display: grid;
    gap: 2rem;
    font-family: var(--font-serif);
    line-height: 1.625;
    color: var(--slate-800);
}

.paper-section-title {
    margin-bottom: 1rem;
    padding-left: 0.75rem;
    border-left: 4px solid var(--blue-600);
    font-family: var(--font-sans);
    font-size: 1.125rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--blue-800);
}

.paper-gap { margin-top: 1rem; }

.paper-callout {
    margin-top: 1rem;
    padding: 1rem;
    border-radius: 0.375rem;
    border: 1px solid #dbeafe;
    background: #eff6ff;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--blue-900);
}

.paper-callout-label { margin-right: 0.5rem; text-transform: uppercase; color: var(--blue-600); }

.paper-list { display: grid; gap: 0.5rem; margin-top: 0.5rem; padding-left: 1.25rem; list-style: disc; }

.paper-steps { display: grid; gap: 1rem; margin-top: 1rem; }
.paper-step { display: flex; gap: 1rem; }
.paper-step-number { flex-shrink: 0; font-weight: 700; color: var(--slate-400); }
.paper-step-title { color: var(--slate-900); }

.paper-note { margin-top: 1rem; font-size: 0.875rem; font-style: italic; color: var(--slate-500); }

.paper-columns { display: grid; gap: 1.5rem; }

.paper-card {
    padding: 1.5rem;
    border-radius: 0.25rem;
    border: 1px solid var(--slate-200);
    background: var(--slate-50);
}

.paper-card-title { margin-bottom: 0.5rem; font-family: var(--font-sans); font-weight: 700; color: var(--slate-900); }
.paper-price { margin-bottom: 0.5rem; font-size: 1.875rem; font-weight: 700; color: var(--blue-600); }
.paper-price-unit { font-size: 0.875rem; font-weight: 400; color: var(--slate-500); }

.paper-card-list {
    display: grid;
    gap: 0.5rem;
    padding: 0;
    list-style: none;
    font-size: 0.875rem;
    color: var(--slate-600);
}

@media (min-width: 768px) {
    .paper-body { padding: 3rem; }
    .paper-columns { grid-template-columns: 1fr 1fr; }
}

/* Footer */

.footer { padding: 4rem 0 2rem; background: var(--slate-950); border-top: 1px solid var(--slate-800); }
.footer-grid { display: grid; gap: 3rem; margin-bottom: 3rem; }
.footer-brand { margin-bottom: 1rem; }
.footer-blurb { max-width: 24rem; color: var(--slate-400); }

.footer-heading {
    margin-bottom: 1rem;
    font-size: 0.875rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: #fff;
}

.footer-list {
    display: grid;
    gap: 0.75rem;
    padding: 0;
    list-style: none;
    font-size: 0.875rem;
    color: var(--slate-400);
}

.footer-contact { display: flex; align-items: center; gap: 0.5rem; }
.footer-link:hover { color: var(--blue-400); }

.footer-bottom {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 0.5rem;
    padding-top: 2rem;
    border-top: 1px solid var(--slate-800);
}

.footer-copyright { font-size: 0.875rem; color: var(--slate-500); }
.footer-marking { font-size: 0.75rem; color: var(--slate-600); }

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: 1fr 1fr; }
    .footer-bottom { flex-direction: row; }
}

@media (min-width: 1024px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-about { grid-column: span 2; }
}

/* Motion */

.pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }

@keyframes pulse {
    50% { opacity: 0.5; }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .pulse, .hero-badge-dot { animation: none; }
}
"#;
