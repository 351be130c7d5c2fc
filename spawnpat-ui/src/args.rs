use std::path::PathBuf;

pub const USAGE: &str = "\
usage: spawnpat [--pattern TEXT | -] [options]

Plays a spawn pattern on a fixed-step clock and prints every phase it fires.
Without --pattern (or with -) the pattern text is read from stdin.

options:
  -p, --pattern TEXT   pattern text, e.g. \"0.5:0:2|0.5:1\"
  -d, --duration SECS  stop after this much simulated time
                       (default: pattern length + 60)
      --fps N          ticks per second (default from config, 60)
  -g, --gravity G      downward acceleration, > 0 (default from config, 2)
      --config PATH    read settings from PATH instead of the user config
      --realtime       sleep between ticks instead of running flat out
      --json           print fired phases as JSON lines
      --copy           print the pattern as the editor would copy it, then exit
  -v, --verbose        debug-level logging
  -h, --help           show this help";

#[derive(Debug, Clone, PartialEq)]
pub enum PatternSource {
    Inline(String),
    Stdin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub pattern: PatternSource,
    pub duration: Option<f64>,
    pub fps: Option<u32>,
    pub gravity: Option<f64>,
    pub config: Option<PathBuf>,
    pub realtime: bool,
    pub json: bool,
    pub copy: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            pattern: PatternSource::Stdin,
            duration: None,
            fps: None,
            gravity: None,
            config: None,
            realtime: false,
            json: false,
            copy: false,
            verbose: false,
            help: false,
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--pattern" => {
                let value = value_for(&arg, args.next())?;
                parsed.pattern = if value == "-" {
                    PatternSource::Stdin
                } else {
                    PatternSource::Inline(value)
                };
            }
            "-" => parsed.pattern = PatternSource::Stdin,
            "-d" | "--duration" => {
                let value = value_for(&arg, args.next())?;
                let duration = value
                    .parse::<f64>()
                    .ok()
                    .filter(|d| d.is_finite() && *d >= 0.0)
                    .ok_or_else(|| format!("invalid duration: {}", value))?;
                parsed.duration = Some(duration);
            }
            "--fps" => {
                let value = value_for(&arg, args.next())?;
                let fps = value
                    .parse::<u32>()
                    .ok()
                    .filter(|f| *f > 0)
                    .ok_or_else(|| format!("invalid fps: {}", value))?;
                parsed.fps = Some(fps);
            }
            "-g" | "--gravity" => {
                let value = value_for(&arg, args.next())?;
                let gravity = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid gravity: {}", value))?;
                parsed.gravity = Some(gravity);
            }
            "--config" => {
                parsed.config = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "--realtime" => parsed.realtime = true,
            "--json" => parsed.json = true,
            "--copy" => parsed.copy = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{} needs a value", flag))
}
