use crate::{
    cli::{InstallArgs, NewArgs},
    config::{Config, Theme},
    error::Result,
    install::{install_with_log, install_with_progress, InstallOptions, Npm, Steps},
    ioutils::{ensure_empty_folder, get_project_dir},
    loader::clone_template,
    vcs,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Number of numbered steps printed by `este new`.
const NEW_PROJECT_STEPS: usize = 6;

/// Drives the `new` and `install` workflows, writing progress to `out`.
pub struct Runner<W: Write> {
    config: Config,
    theme: Theme,
    out: W,
}

impl<W: Write> Runner<W> {
    pub fn new(config: Config, out: W) -> Self {
        let theme = Theme::from(&config.styles);
        Self { config, theme, out }
    }

    /// Clones the template, resets its history and installs dependencies.
    pub fn new_project(&mut self, args: NewArgs) -> Result<PathBuf> {
        if let Some(repo) = args.repo {
            self.config.repo = repo;
        }
        if let Some(bar_length) = args.bar_length {
            self.config.bar_length = bar_length;
        }
        self.config.validate()?;

        let project_dir = ensure_empty_folder(get_project_dir(&args.name, args.dest))?;

        self.step(1, "Cloning repository...")?;
        clone_template(&self.config.repo, &project_dir)?;

        // Commands below run with the project as their working directory.
        self.step(2, "Going to newly created project...")?;

        if args.keep_git {
            self.step(3, "Using template repository...")?;
        } else {
            self.step(3, "Reinitialising repository...")?;
            vcs::reinitialize(&project_dir)?;
        }

        let npm = Npm::new(self.config.npm.program.as_str(), &project_dir);
        let options = InstallOptions::from_config(&self.config)
            .with_steps(Steps::new(4, NEW_PROJECT_STEPS));

        let expected = if args.show_npm_log {
            install_with_log(&npm, &options, &mut self.out)?
        } else {
            install_with_progress(&npm, &options, &mut self.out)?
        };
        log::debug!("Installed {} top-level dependencies", expected.len());

        npm.dedupe(&self.config.npm.dedupe)?;

        writeln!(
            self.out,
            "Project '{}' created successfully in {}.",
            args.name,
            project_dir.display()
        )?;
        Ok(project_dir)
    }

    /// Installs dependencies of an existing project, without step numbers.
    pub fn install(&mut self, args: InstallArgs) -> Result<()> {
        if let Some(bar_length) = args.bar_length {
            self.config.bar_length = bar_length;
        }
        self.config.validate()?;

        let npm = Npm::new(self.config.npm.program.as_str(), &args.dir);
        let options = InstallOptions::from_config(&self.config);
        let expected = install_with_progress(&npm, &options, &mut self.out)?;

        log::info!(
            "Installed {} top-level dependencies in {}",
            expected.len(),
            display_dir(npm.project_dir())
        );
        Ok(())
    }

    fn step(&mut self, index: usize, message: &str) -> Result<()> {
        let label = Steps::new(0, NEW_PROJECT_STEPS).label(index);
        writeln!(self.out, "{}", self.theme.text.apply_to(format!("{label}{message}")))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn display_dir(dir: &Path) -> String {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()).display().to_string()
}
