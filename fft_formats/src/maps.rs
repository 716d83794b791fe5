//! Map ids, directory sectors and location names.

use serde::Serialize;

/// Static description of one of the 128 map slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapDescriptor {
    pub id: u8,
    pub sector: u32,
    /// False for slots with no usable resource directory.
    pub valid: bool,
    pub name: &'static str,
}

pub const MAP_COUNT: usize = 128;

pub fn map_descriptor(id: usize) -> Option<&'static MapDescriptor> {
    MAPS.get(id)
}

/// Every valid map slot in id order.
pub fn valid_maps() -> impl Iterator<Item = &'static MapDescriptor> {
    MAPS.iter().filter(|map| map.valid)
}

const fn map(id: u8, sector: u32, valid: bool, name: &'static str) -> MapDescriptor {
    MapDescriptor {
        id,
        sector,
        valid,
        name,
    }
}

pub static MAPS: [MapDescriptor; MAP_COUNT] = [
    map(0, 10026, false, "Unknown"),
    map(1, 11304, true, "At Main Gate of Igros Castle"),
    map(2, 12656, true, "Back Gate of Lesalia Castle"),
    map(3, 12938, true, "Hall of St. Murond Temple"),
    map(4, 13570, true, "Office of Lesalia Castle"),
    map(5, 14239, true, "Roof of Riovanes Castle"),
    map(6, 14751, true, "At the Gate of Riovanes Castle"),
    map(7, 15030, true, "Inside of Riovanes Castle"),
    map(8, 15595, true, "Riovanes Castle"),
    map(9, 16262, true, "Citadel of Igros Castle"),
    map(10, 16347, true, "Inside of Igros Castle"),
    map(11, 16852, true, "Office of Igros Castle"),
    map(12, 17343, true, "At the Gate of Lionel Castle"),
    map(13, 17627, true, "Inside of Lionel Castle"),
    map(14, 18175, true, "Office of Lionel Castle"),
    map(15, 19510, true, "At the Gate of Limberry Castle (1)"),
    map(16, 20075, true, "Inside of Limberry Castle"),
    map(17, 20162, true, "Underground Cemetery of Limberry Castle"),
    map(18, 20745, true, "Office of Limberry Castle"),
    map(19, 21411, true, "At the Gate of Limberry Castle (2)"),
    map(20, 21692, true, "Inside of Zeltennia Castle"),
    map(21, 22270, true, "Zeltennia Castle"),
    map(22, 22938, true, "Magic City Gariland"),
    map(23, 23282, true, "Belouve Residence"),
    map(24, 23557, true, "Military Academy's Auditorium"),
    map(25, 23899, true, "Yardow Fort City"),
    map(26, 23988, true, "Weapon Storage of Yardow"),
    map(27, 24266, true, "Goland Coal City"),
    map(28, 24544, true, "Colliery Underground First Floor"),
    map(29, 24822, true, "Colliery Underground Second Floor"),
    map(30, 25099, true, "Colliery Underground Third Floor"),
    map(31, 25764, true, "Dorter Trade City"),
    map(32, 26042, true, "Slums in Dorter"),
    map(33, 26229, true, "Hospital in Slums"),
    map(34, 26362, true, "Cellar of Sand Mouse"),
    map(35, 27028, true, "Zaland Fort City"),
    map(36, 27643, true, "Church Outside of Town"),
    map(37, 27793, true, "Ruins Outside Zaland"),
    map(38, 28467, true, "Goug Machine City"),
    map(39, 28555, true, "Underground Passage in Goland"),
    map(40, 29165, true, "Slums in Goug"),
    map(41, 29311, true, "Besrodio's House"),
    map(42, 29653, true, "Warjilis Trade City"),
    map(43, 29807, true, "Port of Warjilis"),
    map(44, 30473, true, "Bervenia Free City"),
    map(45, 30622, true, "Ruins of Zeltennia Castle's Church"),
    map(46, 30966, true, "Cemetery of Heavenly Knight, Balbanes"),
    map(47, 31697, true, "Zarghidas Trade City"),
    map(48, 32365, true, "Slums of Zarghidas"),
    map(49, 33032, true, "Fort Zeakden"),
    map(50, 33701, true, "St. Murond Temple"),
    map(51, 34349, true, "St. Murond Temple"),
    map(52, 34440, true, "Chapel of St. Murond Temple"),
    map(53, 34566, true, "Entrance to Death City"),
    map(54, 34647, true, "Lost Sacred Precincts"),
    map(55, 34745, true, "Graveyard of Airships"),
    map(56, 35350, true, "Orbonne Monastery"),
    map(57, 35436, true, "Underground Book Storage First Floor"),
    map(58, 35519, true, "Underground Book Storage Second Floor"),
    map(59, 35603, true, "Underground Book Storage Third Floor"),
    map(60, 35683, true, "Underground Book Storage Fourth Floor"),
    map(61, 35765, true, "Underground Book Storage Fifth Floor"),
    map(62, 36052, true, "Chapel of Orbonne Monastery"),
    map(63, 36394, true, "Golgorand Execution Site"),
    map(64, 36530, true, "In Front of Bethla Garrison's Sluice"),
    map(65, 36612, true, "Granary of Bethla Garrison"),
    map(66, 37214, true, "South Wall of Bethla Garrison"),
    map(67, 37817, true, "North Wall of Bethla Garrison"),
    map(68, 38386, true, "Bethla Garrison"),
    map(69, 38473, true, "Murond Death City"),
    map(70, 38622, true, "Nelveska Temple"),
    map(71, 39288, true, "Dolbodar Swamp"),
    map(72, 39826, true, "Fovoham Plains"),
    map(73, 40120, true, "Inside of Windmill Shed"),
    map(74, 40724, true, "Sweegy Woods"),
    map(75, 41391, true, "Bervenia Volcano"),
    map(76, 41865, true, "Zeklaus Desert"),
    map(77, 42532, true, "Lenalia Plateau"),
    map(78, 43200, true, "Zigolis Swamp"),
    map(79, 43295, true, "Yuguo Woods"),
    map(80, 43901, true, "Araguay Woods"),
    map(81, 44569, true, "Grog Hill"),
    map(82, 45044, true, "Bed Desert"),
    map(83, 45164, true, "Zirekile Falls"),
    map(84, 45829, true, "Bariaus Hill"),
    map(85, 46498, true, "Mandalia Plains"),
    map(86, 47167, true, "Doguola Pass"),
    map(87, 47260, true, "Bariaus Valley"),
    map(88, 47928, true, "Finath River"),
    map(89, 48595, true, "Poeskas Lake"),
    map(90, 49260, true, "Germinas Peak"),
    map(91, 49538, true, "Thieves Fort"),
    map(92, 50108, true, "Igros-Belouve Residence"),
    map(93, 50387, true, "Broke Down Shed-Wooden Building"),
    map(94, 50554, true, "Broke Down Shed-Stone Building"),
    map(95, 51120, true, "Church"),
    map(96, 51416, true, "Pub"),
    map(97, 52082, true, "Inside Castle Gate in Lesalia"),
    map(98, 52749, true, "Outside Castle Gate in Lesalia"),
    map(99, 53414, true, "Main Street of Lesalia"),
    map(100, 53502, true, "Public Cemetery"),
    map(101, 53579, true, "Tutorial (1)"),
    map(102, 53659, true, "Tutorial (2)"),
    map(103, 54273, true, "Windmill Shed"),
    map(104, 54359, true, "Belouve Residence"),
    map(105, 54528, true, "TERMINATE"),
    map(106, 54621, true, "DELTA"),
    map(107, 54716, true, "NOGIAS"),
    map(108, 54812, true, "VOYAGE"),
    map(109, 54909, true, "BRIDGE"),
    map(110, 55004, true, "VALKYRIES"),
    map(111, 55097, true, "MLAPAN"),
    map(112, 55192, true, "TIGER"),
    map(113, 55286, true, "HORROR"),
    map(114, 55383, true, "END"),
    map(115, 56051, true, "Banished Fort"),
    map(116, 56123, true, "Arena"),
    map(117, 56201, true, "Unknown"),
    map(118, 56279, true, "Unknown"),
    map(119, 56356, true, "Unknown"),
    map(120, 0, false, "???"),
    map(121, 0, false, "???"),
    map(122, 0, false, "???"),
    map(123, 0, false, "???"),
    map(124, 0, false, "???"),
    map(125, 56435, true, "Unknown"),
    map(126, 0, false, "???"),
    map(127, 0, false, "???"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_slots() {
        for (index, map) in MAPS.iter().enumerate() {
            assert_eq!(usize::from(map.id), index);
        }
    }

    #[test]
    fn lookup() {
        let gate = map_descriptor(1).unwrap();
        assert_eq!(gate.sector, 11304);
        assert!(gate.valid);
        assert_eq!(gate.name, "At Main Gate of Igros Castle");
        assert!(!map_descriptor(0).unwrap().valid);
        assert!(map_descriptor(MAP_COUNT).is_none());
        assert!(valid_maps().all(|map| map.sector != 0));
    }
}
