//! Drinking water and wastewater treatment equipment.

use super::{CategorySet, EntrySeed, TaxonomyDefinition};

pub const NAME: &str = "water";
pub const SECTOR_CODE: &str = "WATR";
pub const SUB_SECTOR_CODE: &str = "WATR-DW";

const ENTRIES: &[EntrySeed] = &[
    // Headworks and screening
    EntrySeed::new(
        "Bar Screen (Coarse)",
        "static",
        &["SCREEN", "HEADWORKS", "MECHANICAL"],
        "Mechanical bar screen for removing large debris from influent wastewater.",
    ),
    EntrySeed::new(
        "Fine Screen (Drum)",
        "rotating",
        &["SCREEN", "HEADWORKS", "MECHANICAL"],
        "Rotating drum screen for removing fine solids.",
    ),
    EntrySeed::new(
        "Grit Chamber (Vortex)",
        "static",
        &["SEPARATION", "GRIT", "VORTEX"],
        "Vortex grit removal system to separate sand and grit.",
    ),
    EntrySeed::new(
        "Grit Classifier",
        "rotating",
        &["SEPARATION", "GRIT", "CONVEYOR"],
        "Screw conveyor system for washing and dewatering grit.",
    ),
    EntrySeed::new(
        "Parshall Flume",
        "static",
        &["FLOW", "HEADWORKS", "MEASUREMENT"],
        "Open channel flow metering structure.",
    ),

    // Clarification and sedimentation
    EntrySeed::new(
        "Primary Clarifier (Circular)",
        "static",
        &["CLARIFIER", "SEDIMENTATION", "PRIMARY"],
        "Circular tank with scraper mechanism for settling solids.",
    ),
    EntrySeed::new(
        "Secondary Clarifier (Rectangular)",
        "static",
        &["CLARIFIER", "SEDIMENTATION", "SECONDARY"],
        "Rectangular basin with chain and flight sludge collector.",
    ),
    EntrySeed::new(
        "Lamella Plate Settler",
        "static",
        &["CLARIFIER", "SEDIMENTATION", "COMPACT"],
        "Inclined plate settler for high-rate clarification.",
    ),
    EntrySeed::new(
        "Dissolved Air Flotation (DAF)",
        "static",
        &["THICKENING", "FLOTATION", "CLARIFICATION"],
        "Tank using micro-bubbles to float solids to the surface.",
    ),
    EntrySeed::new(
        "Scum Skimmer",
        "rotating",
        &["CLARIFIER", "SKIMMER", "MECHANICAL"],
        "Mechanism for removing floating scum from clarifier surface.",
    ),

    // Biological treatment
    EntrySeed::new(
        "Aeration Basin (Diffused Air)",
        "static",
        &["BIOREACTOR", "AERATION", "ACTIVATED_SLUDGE"],
        "Tank with fine bubble diffusers for biological treatment.",
    ),
    EntrySeed::new(
        "Surface Aerator",
        "rotating",
        &["AERATOR", "BIOREACTOR", "MECHANICAL"],
        "Floating or fixed mechanical aerator for surface agitation.",
    ),
    EntrySeed::new(
        "Trickling Filter",
        "static",
        &["BIOREACTOR", "FIXED_FILM", "ATTACHED_GROWTH"],
        "Bed of media over which wastewater is distributed for treatment.",
    ),
    EntrySeed::new(
        "Rotating Biological Contactor (RBC)",
        "rotating",
        &["BIOREACTOR", "FIXED_FILM", "ROTATING"],
        "Series of rotating discs partially submerged in wastewater.",
    ),
    EntrySeed::new(
        "Membrane Bioreactor (MBR)",
        "static",
        &["BIOREACTOR", "MEMBRANE", "FILTRATION"],
        "Biological treatment combined with membrane filtration.",
    ),
    EntrySeed::new(
        "Sequencing Batch Reactor (SBR)",
        "static",
        &["BIOREACTOR", "BATCH", "ACTIVATED_SLUDGE"],
        "Single tank system for fill, react, settle, and decant steps.",
    ),

    // Filtration
    EntrySeed::new(
        "Rapid Sand Filter",
        "static",
        &["FILTER", "GRAVITY", "MEDIA"],
        "Gravity filter using sand and anthracite media.",
    ),
    EntrySeed::new(
        "Pressure Filter",
        "static",
        &["FILTER", "PRESSURE", "MEDIA"],
        "Enclosed vessel filter operating under pressure.",
    ),
    EntrySeed::new(
        "Disc Filter",
        "rotating",
        &["FILTER", "TERTIARY", "CLOTH"],
        "Rotating cloth disc filter for tertiary filtration.",
    ),
    EntrySeed::new(
        "Ultrafiltration Skid",
        "static",
        &["FILTER", "MEMBRANE", "UF"],
        "Skid-mounted ultrafiltration membrane system.",
    ),
    EntrySeed::new(
        "Reverse Osmosis Skid",
        "static",
        &["FILTER", "MEMBRANE", "RO"],
        "Skid-mounted reverse osmosis system for desalination or reuse.",
    ),

    // Disinfection
    EntrySeed::new(
        "Chlorine Contact Basin",
        "static",
        &["DISINFECTION", "CHLORINE", "CONTACT"],
        "Baffled tank for providing contact time with chlorine.",
    ),
    EntrySeed::new(
        "UV Disinfection System (Open Channel)",
        "static",
        &["DISINFECTION", "UV", "LIGHT"],
        "Banks of UV lamps submerged in an open channel.",
    ),
    EntrySeed::new(
        "UV Reactor (Closed Vessel)",
        "static",
        &["DISINFECTION", "UV", "PRESSURE"],
        "Enclosed UV reactor for pressurized flow.",
    ),
    EntrySeed::new(
        "Ozone Generator",
        "static",
        &["DISINFECTION", "OZONE", "GENERATION"],
        "Equipment for generating ozone gas for disinfection.",
    ),
    EntrySeed::new(
        "Sodium Hypochlorite Generator",
        "static",
        &["GENERATOR", "CHLORINE", "ELECTROLYSIS"],
        "On-site generation of hypochlorite from brine.",
    ),

    // Sludge handling
    EntrySeed::new(
        "Anaerobic Digester",
        "static",
        &["DIGESTER", "SLUDGE", "BIOGAS"],
        "Sealed tank for anaerobic decomposition of sludge.",
    ),
    EntrySeed::new(
        "Aerobic Digester",
        "static",
        &["DIGESTER", "SLUDGE", "AERATION"],
        "Aerated tank for stabilizing sludge.",
    ),
    EntrySeed::new(
        "Gravity Thickener",
        "static",
        &["THICKENER", "SLUDGE", "GRAVITY"],
        "Tank for thickening sludge by gravity settling.",
    ),
    EntrySeed::new(
        "Belt Filter Press",
        "rotating",
        &["DEWATERING", "SLUDGE", "PRESS"],
        "Continuous belt press for dewatering sludge.",
    ),
    EntrySeed::new(
        "Centrifuge (Dewatering)",
        "rotating",
        &["DEWATERING", "SLUDGE", "CENTRIFUGE"],
        "High-speed centrifuge for sludge dewatering.",
    ),
    EntrySeed::new(
        "Screw Press",
        "rotating",
        &["DEWATERING", "SLUDGE", "SCREW"],
        "Slow-speed screw press for sludge dewatering.",
    ),

    // Pumps and blowers
    EntrySeed::new(
        "Centrifugal Pump (End Suction)",
        "rotating",
        &["PUMP", "WATER", "KINETIC"],
        "Standard end-suction centrifugal pump.",
    ),
    EntrySeed::new(
        "Vertical Turbine Pump",
        "rotating",
        &["PUMP", "WATER", "VERTICAL"],
        "Vertical pump for wet wells or clear wells.",
    ),
    EntrySeed::new(
        "Submersible Pump",
        "rotating",
        &["PUMP", "WASTEWATER", "SUBMERSIBLE"],
        "Pump designed to operate submerged in fluid.",
    ),
    EntrySeed::new(
        "Progressive Cavity Pump",
        "rotating",
        &["PUMP", "SLUDGE", "PD"],
        "Positive displacement pump for viscous sludge.",
    ),
    EntrySeed::new(
        "Peristaltic Pump",
        "rotating",
        &["PUMP", "CHEMICAL", "METERING"],
        "Hose pump for chemical dosing.",
    ),
    EntrySeed::new(
        "Positive Displacement Blower",
        "rotating",
        &["BLOWER", "AERATION", "PD"],
        "Rotary lobe blower for aeration air supply.",
    ),
    EntrySeed::new(
        "Turbo Blower",
        "rotating",
        &["BLOWER", "AERATION", "HIGH_SPEED"],
        "High-speed centrifugal blower with air bearings.",
    ),
    EntrySeed::new(
        "Air Compressor",
        "rotating",
        &["COMPRESSOR", "UTILITY", "PNEUMATIC"],
        "Compressor for instrument air or pneumatic tools.",
    ),

    // Valves and gates
    EntrySeed::new(
        "Gate Valve (Resilient Seat)",
        "piping",
        &["VALVE", "ISOLATION", "WATER"],
        "Isolation valve with a rubber-encapsulated wedge.",
    ),
    EntrySeed::new(
        "Butterfly Valve",
        "piping",
        &["VALVE", "ISOLATION", "CONTROL"],
        "Quarter-turn valve for flow control or isolation.",
    ),
    EntrySeed::new(
        "Plug Valve (Eccentric)",
        "piping",
        &["VALVE", "ISOLATION", "SLUDGE"],
        "Valve with eccentric plug, suitable for sludge.",
    ),
    EntrySeed::new(
        "Check Valve (Swing)",
        "piping",
        &["VALVE", "NON_RETURN", "SWING"],
        "Valve preventing backflow.",
    ),
    EntrySeed::new(
        "Air Release Valve",
        "piping",
        &["VALVE", "AIR", "PROTECTION"],
        "Valve to release accumulated air from pipelines.",
    ),
    EntrySeed::new(
        "Sluice Gate",
        "piping",
        &["GATE", "ISOLATION", "FLOW_CONTROL"],
        "Vertical sliding gate for channel isolation.",
    ),
    EntrySeed::new(
        "Slide Gate",
        "piping",
        &["GATE", "ISOLATION", "ALUMINUM"],
        "Lighter duty gate for open channels.",
    ),
    EntrySeed::new(
        "Telescoping Valve",
        "piping",
        &["VALVE", "SLUDGE", "DRAW_OFF"],
        "Adjustable slip pipe for sludge draw-off.",
    ),

    // Chemical systems
    EntrySeed::new(
        "Chemical Storage Tank (FRP)",
        "static",
        &["TANK", "STORAGE", "CHEMICAL"],
        "Fiberglass reinforced plastic tank for chemical storage.",
    ),
    EntrySeed::new(
        "Chemical Storage Tank (Poly)",
        "static",
        &["TANK", "STORAGE", "POLY"],
        "Polyethylene tank for chemical storage.",
    ),
    EntrySeed::new(
        "Lime Silo",
        "static",
        &["SILO", "STORAGE", "SOLIDS"],
        "Silo for storing dry lime or soda ash.",
    ),
    EntrySeed::new(
        "Polymer Blending Unit",
        "static",
        &["MIXER", "CHEMICAL", "POLYMER"],
        "Skid for wetting and activating dry or emulsion polymer.",
    ),
    EntrySeed::new(
        "Static Mixer",
        "static",
        &["MIXER", "INLINE", "STATIC"],
        "In-line mixing device with no moving parts.",
    ),

    // Instrumentation
    EntrySeed::new(
        "Magnetic Flow Meter",
        "instrumentation",
        &["METER", "FLOW", "CONDUCTIVE"],
        "Electromagnetic flow meter for conductive liquids.",
    ),
    EntrySeed::new(
        "Ultrasonic Level Sensor",
        "instrumentation",
        &["LEVEL", "NON_CONTACT", "ULTRASONIC"],
        "Non-contact level measurement.",
    ),
    EntrySeed::new(
        "Submersible Level Transducer",
        "instrumentation",
        &["LEVEL", "HYDROSTATIC", "SUBMERSIBLE"],
        "Pressure sensor for level measurement in wells.",
    ),
    EntrySeed::new(
        "Dissolved Oxygen Probe",
        "instrumentation",
        &["ANALYZER", "DO", "AERATION"],
        "Sensor for measuring dissolved oxygen concentration.",
    ),
    EntrySeed::new(
        "pH Sensor",
        "instrumentation",
        &["ANALYZER", "PH", "QUALITY"],
        "Sensor for measuring pH.",
    ),
    EntrySeed::new(
        "Turbidity Meter",
        "instrumentation",
        &["ANALYZER", "TURBIDITY", "QUALITY"],
        "Instrument for measuring water clarity.",
    ),
    EntrySeed::new(
        "Chlorine Residual Analyzer",
        "instrumentation",
        &["ANALYZER", "CHLORINE", "DISINFECTION"],
        "Analyzer for free or total chlorine residual.",
    ),
    EntrySeed::new(
        "Total Suspended Solids (TSS) Probe",
        "instrumentation",
        &["ANALYZER", "SOLIDS", "QUALITY"],
        "Probe for measuring suspended solids concentration.",
    ),

    // Electrical
    EntrySeed::new(
        "Induction Motor (TEFC)",
        "electrical",
        &["MOTOR", "DRIVE", "AC"],
        "Totally Enclosed Fan Cooled AC motor.",
    ),
    EntrySeed::new(
        "Submersible Motor",
        "electrical",
        &["MOTOR", "DRIVE", "SUBMERSIBLE"],
        "Motor designed for submerged operation.",
    ),
    EntrySeed::new(
        "Variable Frequency Drive (VFD)",
        "electrical",
        &["DRIVE", "CONTROL", "SPEED"],
        "Controller for adjusting motor speed.",
    ),
    EntrySeed::new(
        "Motor Control Center (MCC)",
        "electrical",
        &["POWER", "CONTROL", "DISTRIBUTION"],
        "Assembly of motor starters and controls.",
    ),
    EntrySeed::new(
        "Switchgear (Medium Voltage)",
        "electrical",
        &["POWER", "DISTRIBUTION", "HV"],
        "Main power distribution equipment.",
    ),
    EntrySeed::new(
        "Emergency Diesel Generator",
        "electrical",
        &["POWER", "GENERATOR", "BACKUP"],
        "Backup power source for critical loads.",
    ),
    EntrySeed::new(
        "Automatic Transfer Switch (ATS)",
        "electrical",
        &["POWER", "SWITCH", "TRANSFER"],
        "Switch for transferring load between utility and generator.",
    ),
];

pub fn definition() -> TaxonomyDefinition {
    TaxonomyDefinition::from_seeds(
        NAME,
        SECTOR_CODE,
        SUB_SECTOR_CODE,
        CategorySet::core(),
        ENTRIES,
    )
}
