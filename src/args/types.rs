use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the CORS relay fronting the GHIN API
    #[arg(
        short = 'b',
        long,
        value_name = "BASE_URL",
        default_value = "https://ghin-proxy.supernole1.workers.dev",
        value_parser = crate::args::validation::check_base_url
    )]
    pub base_url: String,

    /// GHIN number or the e-mail address on the account
    #[arg(
        short = 'g',
        long,
        value_name = "GHIN_OR_EMAIL",
        value_parser = crate::args::validation::check_login_identifier
    )]
    pub ghin: String,

    /// Account password. Prompted for on stdin when omitted.
    #[arg(short = 'w', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Course to compute hole-by-hole stats for; omit to list courses
    #[arg(short = 'c', long, value_name = "COURSE_ID")]
    pub course_id: Option<i64>,

    /// Stats column to sort by: hole, par, avg, vspar, stddev, best, worst, or rounds
    #[arg(
        short = 's',
        long,
        value_name = "COLUMN",
        value_parser = crate::args::validation::check_sort_column
    )]
    pub sort: Option<String>,

    /// Sort the stats table descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}
