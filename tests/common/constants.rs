//! Shared constants for end-to-end tests

/// Header as found in the public Spotify tracks dump: an unnamed index
/// column, the required columns in dump order, and extra audio
/// features the pipeline ignores.
pub const RAW_HEADER: &str = "Unnamed: 0,track_id,artists,album_name,track_name,popularity,duration_ms,explicit,danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,valence,tempo,time_signature,track_genre";

pub const RAW_HEADER_WITHOUT_TEMPO: &str = "Unnamed: 0,track_id,artists,album_name,track_name,popularity,duration_ms,explicit,danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,valence,time_signature,track_genre";

pub const VALID_ROW_HIT: &str = "0,5SuOikwiRyPMVoIQDJUgSV,Gen Hoshino,Comedy,Comedy,95,230666,False,0.676,0.461,1,-6.746,0,0.143,0.0322,1.01e-06,0.358,0.715,87.917,4,Acoustic";

pub const VALID_ROW_BAD_POPULARITY: &str = "1,4qPNDBW1i3p13qLCt0Ki3A,Ben Woodward , Ghost (Acoustic) ,  Ghost - Acoustic ,abc,149610,False,0.42,0.166,1,-17.235,1,0.0763,0.924,5.56e-06,0.101,0.267,77.489,4,ACOUSTIC";

pub const ROW_EMPTY_ARTISTS: &str = "2,1iJBSr7s7jYXzM8EGcbK5b,,Intentions,To Begin Again,57,210826,False,0.438,0.359,0,-9.734,1,0.0557,0.21,0.0,0.117,0.12,76.332,4,acoustic";

pub const ROW_MISSING_NUMBERS: &str = "3,6lfxq3CG4xtTiEg7opyCyx,Kina Grannis,Crazy Rich Asians,Can't Help Falling In Love,,,True,,,0,,1,,,,,,,3,";

pub const ROW_NON_BOOLEAN_EXPLICIT: &str = "4,7k9GuJYLp2AzqokyEdwEw2,Ross Copperman,Hunger,Hunger,56,205594,yes,0.442,0.632,1,-6.77,1,0.0295,0.426,0.00419,0.0735,0.196,78.899,4,Acoustic";

pub const DEFAULT_TABLE: &str = "spotify_tracks";

pub const OUTPUT_COLUMNS: [&str; 14] = [
    "track_id",
    "track_name",
    "artists",
    "album_name",
    "track_genre",
    "popularity",
    "explicit",
    "duration_ms",
    "danceability",
    "energy",
    "valence",
    "tempo",
    "duration_min",
    "popularity_bucket",
];
