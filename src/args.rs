use clap::Parser;

/// This is an election tallying program: voters line up, then vote one at a time.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON session file with the election settings, the candidates and the
    /// commands to replay. If not provided, the interactive menu is started.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, optional) An Excel file listing the candidates in its first column.
    /// The candidates are added before the ones of the session file.
    #[clap(long, value_parser)]
    pub roster: Option<String>,

    /// (default: first worksheet) The name of the worksheet to read in the roster file.
    #[clap(long, value_parser)]
    pub worksheet: Option<String>,

    /// (default 0) The number of rows to skip at the top of the roster, for example a header.
    #[clap(long, value_parser, default_value_t = 0)]
    pub roster_skip_rows: usize,

    /// (file path, 'stdout' or empty) If specified, the summary of the session will be written in JSON
    /// format to the given location. Otherwise the text reports are printed (session files only).
    /// In interactive mode, the summary is written when the menu is exited.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected summary in JSON format. If provided, elq will
    /// check that the summary of the session (or of the interactive menu, once exited) matches
    /// the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, adding a candidate that already exists is an error.
    #[clap(long, takes_value = false)]
    pub reject_duplicates: bool,

    /// If passed as an argument, the session stops at the first refused command.
    #[clap(long, takes_value = false)]
    pub strict: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
