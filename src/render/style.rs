//! Stylesheets embedded into every page. Plain CSS, no interpolation.

pub(super) const BASE_CSS: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'MS Sans Serif', Arial, sans-serif;
            background: #000000;
            color: #00ff00;
            padding: 2rem;
            line-height: 1.6;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
        }

        a {
            color: #00ffff;
        }

        a:hover {
            color: #ffffff;
        }

        .back-link {
            display: inline-block;
            margin-bottom: 1.5rem;
            text-decoration: none;
        }

        h1 {
            font-size: 2rem;
            margin-bottom: 0.5rem;
            text-shadow: 0 0 8px #00ff00;
        }

        .episode-date {
            color: #00aa00;
            font-size: 0.9rem;
            margin-bottom: 1rem;
        }
"#;

pub(super) const EPISODE_CSS: &str = r#"
        .watch-link {
            display: inline-block;
            margin-bottom: 2rem;
            padding: 0.5rem 1rem;
            border: 2px solid #00ff00;
            text-decoration: none;
        }

        .description {
            white-space: pre-line;
            border-left: 3px solid #00aa00;
            padding-left: 1rem;
            margin-bottom: 2rem;
        }

        .transcript h2 {
            font-size: 1.4rem;
            margin-bottom: 1rem;
            border-bottom: 1px solid #00aa00;
        }

        .transcript-line {
            margin-bottom: 0.5rem;
        }

        .timestamp {
            color: #ffff00;
            font-family: 'Courier New', monospace;
            margin-right: 0.5rem;
        }

        .no-transcript {
            border: 2px dashed #ff0000;
            color: #ff6666;
            padding: 1.5rem;
        }
"#;

pub(super) const INDEX_CSS: &str = r#"
        .subtitle {
            color: #00aa00;
            margin-bottom: 2rem;
        }

        .episode-card {
            display: flex;
            gap: 1.5rem;
            border: 2px solid #00ff00;
            padding: 1rem;
            margin-bottom: 1.5rem;
        }

        .thumbnail {
            width: 240px;
            height: auto;
            flex-shrink: 0;
            border: 1px solid #00aa00;
        }

        .episode-info h2 {
            font-size: 1.3rem;
            margin-bottom: 0.25rem;
        }

        .episode-snippet {
            margin-bottom: 0.75rem;
        }

        .no-episodes {
            color: #ff6666;
        }

        @media (max-width: 640px) {
            .episode-card {
                flex-direction: column;
            }

            .thumbnail {
                width: 100%;
            }
        }
"#;
