//! HTML template constants for the `HtmlFormatter`.
//!
//! Separates CSS styles and JavaScript code from the core formatting logic.

/// HTML document header including all CSS styles.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tech Company Salary Comparison</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-grid: #e2e8f0;
            --color-accent: #3b82f6;
        }
        @media (prefers-color-scheme: dark) {
            :root {
                --color-bg: #0f172a;
                --color-card: #1e293b;
                --color-border: #334155;
                --color-text: #f1f5f9;
                --color-text-muted: #94a3b8;
                --color-grid: #334155;
            }
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; color: var(--color-text); }
        .subtitle { color: var(--color-text-muted); margin-bottom: 1.5rem; }
        .settings { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1.5rem; }
        .setting { padding: 0.25rem 0.75rem; border: 1px solid var(--color-border); border-radius: 9999px; background: var(--color-card); font-size: 0.875rem; }
        .setting strong { font-weight: 600; }
        .tab-list { display: flex; gap: 0.5rem; margin-bottom: 1rem; flex-wrap: wrap; }
        .tab-btn { padding: 0.5rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); color: var(--color-text); border-radius: 0.375rem; cursor: pointer; font-size: 0.875rem; transition: all 0.15s; }
        .tab-btn:hover { background: var(--color-bg); }
        .tab-btn.active { background: var(--color-text); color: var(--color-card); border-color: var(--color-text); }
        .tab-panel { display: none; }
        .tab-panel.active { display: block; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .chart-container h2 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; color: var(--color-text); }
        .chart-container svg { width: 100%; height: auto; }
        .chart-container svg rect { transition: opacity 0.15s ease; }
        .chart-container svg .stack:hover rect { stroke: var(--color-text); stroke-width: 0.5; }
        .chart-container svg .stack.hidden { display: none; }
        .chart-container svg .legend-item { cursor: pointer; }
        .chart-container svg .legend-item.off { opacity: 0.3; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); }
        .footer p { margin-bottom: 0.25rem; }
        @media (max-width: 768px) {
            body { padding: 1rem; }
            h1 { font-size: 1.5rem; }
        }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .tab-list { display: none; }
            .tab-panel { display: block; }
            .chart-container { border: 1px solid #333; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Tech Company Salary Comparison</h1>
        <p class="subtitle">Monthly salary bands by position across Southeast Asian tech companies</p>
"#;

/// Closes the container and adds tab switching and legend toggles.
pub const HTML_SCRIPT: &str = r#"    </div>
    <script>
        (function() {
            const tabs = document.querySelectorAll('.tab-btn');
            const panels = document.querySelectorAll('.tab-panel');
            tabs.forEach(tab => {
                tab.addEventListener('click', () => {
                    tabs.forEach(t => t.classList.toggle('active', t === tab));
                    panels.forEach(p => p.classList.toggle('active', p.dataset.track === tab.dataset.track));
                });
            });

            // Each panel keeps its own company toggles
            panels.forEach(panel => {
                panel.querySelectorAll('.legend-item').forEach(item => {
                    item.addEventListener('click', () => {
                        const company = item.dataset.company;
                        const stacks = panel.querySelectorAll('.stack[data-company="' + company + '"]');
                        const hide = !item.classList.contains('off');
                        panel.querySelectorAll('.legend-item[data-company="' + company + '"]')
                            .forEach(entry => entry.classList.toggle('off', hide));
                        stacks.forEach(stack => stack.classList.toggle('hidden', hide));
                    });
                });
            });
        })();
    </script>
</body>
</html>
"#;
