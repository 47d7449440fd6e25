use clap::Parser;
use clap::error::ErrorKind;

use crate::failure::Failure;

#[derive(Parser, Clone, Debug)]
#[command(name = "render", version)]
#[command(
    about = "Render a template file with key=value variables",
    long_about = "Render a single template against variables supplied on the command line \n\
and write the result to a file. The template language supports substitution, \n\
conditionals, loops, and inheritance; includes are resolved relative to the \n\
directory the template lives in."
)]
pub struct Cli {
    #[arg(
        help = "Path to the template file",
        long_help = "Path to the template. A bare filename is looked up in the current directory; a path with directories scopes template lookup (and any includes or inheritance) to its parent directory."
    )]
    pub template: String,
    #[arg(
        help = "Destination file, overwritten if it exists",
        long_help = "Where to write the rendered output. The file is created if absent and truncated if present."
    )]
    pub out_file: String,
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Variable assignments of the form key=value",
        long_help = "Zero or more key=value tokens. Values may contain '='; only the first one splits. Later duplicate keys override earlier ones, and tokens without '=' are ignored."
    )]
    pub assignments: Vec<String>,
}

impl Cli {
    pub fn build() -> Result<Self, Failure> {
        match <Self as Parser>::try_parse() {
            Ok(cli) => Ok(cli),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(_) => Err(Failure::Usage),
        }
    }
}
