use std::io;
use std::path::{Path, PathBuf};

use nix::unistd;

/// The only state shared between loop iterations.
pub trait WorkingDir {
    fn current(&self) -> io::Result::<PathBuf>;
    fn change(&mut self, dir: &Path) -> io::Result::<()>;
}

/// The real working directory of this process, inherited by every child.
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    #[inline(always)]
    fn current(&self) -> io::Result::<PathBuf> {
        Ok(unistd::getcwd()?)
    }

    #[inline(always)]
    fn change(&mut self, dir: &Path) -> io::Result::<()> {
        Ok(unistd::chdir(dir)?)
    }
}

const RESET: &str = "\x1b[0m";

pub struct Env {
    pub cwd: Box::<dyn WorkingDir>,
    pub color: bool,
}

impl Env {
    #[inline(always)]
    pub fn new(cwd: Box::<dyn WorkingDir>, color: bool) -> Self {
        Self { cwd, color }
    }

    /// `<cwd>>> `, followed by an attribute reset when colors are on.
    pub fn prompt(&self) -> String {
        let cwd = match self.cwd.current() {
            Ok(cwd) => cwd.display().to_string(),
            Err(e) => {
                log::warn!("could not determine working directory: {e}");
                "?".to_owned()
            }
        };
        let reset = if self.color { RESET } else { "" };
        format!("{cwd}>> {reset}")
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory working directory; `change` only accepts listed dirs.
    pub struct FakeDir {
        pub cwd: PathBuf,
        pub dirs: Vec::<PathBuf>,
    }

    impl FakeDir {
        pub fn new(cwd: &str, dirs: &[&str]) -> Self {
            Self {
                cwd: cwd.into(),
                dirs: dirs.iter().map(PathBuf::from).collect()
            }
        }
    }

    impl WorkingDir for FakeDir {
        fn current(&self) -> io::Result::<PathBuf> {
            Ok(self.cwd.clone())
        }

        fn change(&mut self, dir: &Path) -> io::Result::<()> {
            let target = self.cwd.join(dir);
            if self.dirs.contains(&target) {
                self.cwd = target;
                Ok(())
            } else {
                Err(io::Error::from_raw_os_error(libc::ENOENT))
            }
        }
    }

    pub struct NoDir;

    impl WorkingDir for NoDir {
        fn current(&self) -> io::Result::<PathBuf> {
            Err(io::Error::from_raw_os_error(libc::ENOENT))
        }

        fn change(&mut self, _: &Path) -> io::Result::<()> {
            Err(io::Error::from_raw_os_error(libc::ENOENT))
        }
    }
}
