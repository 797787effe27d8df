//! The default nine-spoke map.
//!
//! Coordinates are screen units on a 1200 × 700 canvas, hub in the middle.

use std::io::Cursor;

use ph_network::{NetworkResult, Topology, load_topology_reader};

pub const DEFAULT_TOPOLOGY_CSV: &str = "\
name,x,y,role\n\
MAIN,550,350,hub\n\
PRG,415,305,spoke\n\
Brno,780,545,spoke\n\
OST,1060,370,spoke\n\
PLZ,210,390,spoke\n\
ČB,400,600,spoke\n\
HK,645,270,spoke\n\
LIB,520,120,spoke\n\
OLO,900,450,spoke\n\
Zlín,980,540,spoke\n\
";

pub fn default_topology() -> NetworkResult<Topology> {
    load_topology_reader(Cursor::new(DEFAULT_TOPOLOGY_CSV))
}
