use calc_dist::RawArgs;
use clap::Parser;

/// Command-line arguments for the calc-dist tool.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Calculates the distance between two points from their latitude and longitude.\n\
                  Prints the distance on the selected ellipsoid (Hubeny) followed by the\n\
                  great-circle distance on a sphere of the equatorial radius."
)]
pub struct Args {
    /// Ellipsoid type: 0 = BESSEL, 1 = GRS80, 2 = WGS84.
    #[arg(value_name = "TYPE")]
    pub ellipsoid: String,

    /// Latitude of the first point (-90.00000000 to 90.00000000).
    #[arg(allow_negative_numbers = true)]
    pub lat1: String,

    /// Longitude of the first point (-180.00000000 to 180.00000000).
    #[arg(allow_negative_numbers = true)]
    pub lon1: String,

    /// Latitude of the second point (-90.00000000 to 90.00000000).
    #[arg(allow_negative_numbers = true)]
    pub lat2: String,

    /// Longitude of the second point (-180.00000000 to 180.00000000).
    #[arg(allow_negative_numbers = true)]
    pub lon2: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log intermediate values (eccentricity, radii of curvature) to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn raw_args(&self) -> RawArgs {
        RawArgs {
            ellipsoid: self.ellipsoid.clone(),
            lat1: self.lat1.clone(),
            lon1: self.lon1.clone(),
            lat2: self.lat2.clone(),
            lon2: self.lon2.clone(),
        }
    }
}
