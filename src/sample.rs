//! Sample content for bootstrapping a new content directory (`--init`).
//!
//! Writes one example file per page type, overwriting any file with the same
//! name, plus a stock `config.toml` when the content root has none.

use crate::config::{self, CONFIG_FILE};
use crate::generate::PageKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SAMPLE_PAPER: &str = r#"---
slug: "attention-rl-2024"
title: "Attention Mechanisms in Deep Reinforcement Learning"
authors:
  - "Achraf Hsain"
  - "Jane Collaborator"
  - "John Advisor"
venue: "NeurIPS"
year: 2024
date: "2024-12-01"
image: "assets/images/papers/paper-placeholder.png"
arxiv: "https://arxiv.org/abs/2024.xxxxx"
code: "https://github.com/achrafhsain/attention-rl"
tags:
  - "reinforcement-learning"
  - "attention"
  - "deep-learning"
featured: true
bibtex: |
  @inproceedings{hsain2024attention,
    title={Attention Mechanisms in Deep Reinforcement Learning},
    author={Hsain, Achraf and Collaborator, Jane and Advisor, John},
    booktitle={NeurIPS},
    year={2024}
  }
---
This paper introduces novel attention mechanisms for deep reinforcement learning agents, enabling more efficient exploration and better generalization across tasks. We demonstrate significant improvements on standard benchmarks.
"#;

pub const SAMPLE_PROJECT: &str = r#"---
slug: "rl-gym-toolkit"
title: "RL-Gym-Toolkit"
description: "Custom OpenAI Gym environments for RL research"
image: "assets/images/projects/project-placeholder.png"
demo: "https://demo.example.com"
github: "https://github.com/achrafhsain/rl-gym-toolkit"
tags:
  - "python"
  - "reinforcement-learning"
  - "gym"
featured: true
order: 1
---
A comprehensive collection of custom OpenAI Gym environments designed for reinforcement learning research. Includes challenging navigation, manipulation, and multi-agent scenarios with configurable difficulty levels.
"#;

/// Files written by [`create_sample_content`].
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<PathBuf>,
    /// Set when a stock config was written (none existed before).
    pub config_written: Option<PathBuf>,
}

fn sample_for(kind: PageKind) -> (&'static str, &'static str) {
    match kind {
        PageKind::Papers => ("attention-rl-2024.md", SAMPLE_PAPER),
        PageKind::Projects => ("rl-gym-toolkit.md", SAMPLE_PROJECT),
    }
}

pub fn create_sample_content(content_root: &Path) -> io::Result<InitReport> {
    let mut report = InitReport::default();

    for kind in PageKind::ALL {
        let dir = content_root.join(kind.content_dir());
        fs::create_dir_all(&dir)?;
        let (file_name, content) = sample_for(kind);
        let path = dir.join(file_name);
        fs::write(&path, content)?;
        report.written.push(path);
    }

    let config_path = content_root.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, config::stock_config_toml())?;
        report.config_written = Some(config_path);
    }

    Ok(report)
}
