//! Event ids, usability and scenario names.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventDescriptor {
    pub id: u16,
    /// Whether the event carries code and text worth viewing.
    pub usable: bool,
    pub name: &'static str,
}

pub fn event_descriptor(id: usize) -> Option<&'static EventDescriptor> {
    EVENT_NAMES.get(id)
}

const fn event(id: u16, usable: bool, name: &'static str) -> EventDescriptor {
    EventDescriptor { id, usable, name }
}

pub static EVENT_NAMES: [EventDescriptor; crate::event::EVENT_COUNT] = [
    event(0x0000, false, "Empty"),
    event(0x0001, false, "Orbonne Prayer (Setup)"),
    event(0x0002, true, "Orbonne Prayer"),
    event(0x0003, false, "Orbonne Battle (Setup)"),
    event(0x0004, true, "Orbonne Battle"),
    event(0x0005, true, "Orbonne Battle (Gafgarion and Agrias chat)"),
    event(0x0006, true, "Orbonne Battle (Abducting the Princess)"),
    event(0x0007, false, "Military Academy (Setup)"),
    event(0x0008, true, "Military Academy"),
    event(0x0009, false, "Gariland Fight (Setup)"),
    event(0x000A, true, "Gariland Fight"),
    event(0x000B, true, "Gariland Fight (Ramza, Delita, Thief Chat)"),
    event(0x000C, true, "Gariland Fight (Ramza talking about honest lives)"),
    event(0x000D, false, "Balbanes's Death (Setup)"),
    event(0x000E, true, "Balbanes's Death"),
    event(0x000F, false, "Mandalia Plains (Setup)"),
    event(0x0010, true, "Mandalia Plains (Options Given)"),
    event(0x0011, true, "Mandalia Plains (Destroy Corps Chosen)"),
    event(0x0012, true, "Mandalia Plains (Save Algus Chosen)"),
    event(0x0013, true, "Mandalia Plains (Algus First Turn)"),
    event(0x0014, true, "Mandalia Plains (Algus KO'd, Destroy Chosen)"),
    event(0x0015, true, "Mandalia Plains (Algus KO'd, Save Chosen)"),
    event(0x0016, true, "Mandalia Plains (Victory, Algus KO'd)"),
    event(0x0017, true, "Mandalia Plains (Victory, Algus Alive)"),
    event(0x0018, false, "Introducing Algus (Setup)"),
    event(0x0019, true, "Introducing Algus"),
    event(0x001A, false, "Returning to Igros (Setup)"),
    event(0x001B, true, "Returning to Igros"),
    event(0x001C, false, "Family Meeting (Setup)"),
    event(0x001D, true, "Family Meeting"),
    event(0x001E, false, "Sweegy Woods (Setup)"),
    event(0x001F, true, "Sweegy Woods"),
    event(0x0020, true, "Sweegy Woods (Victory)"),
    event(0x0021, false, "Dorter Trade City1 (Setup)"),
    event(0x0022, true, "Dorter Trade City1"),
    event(0x0023, true, "Dorter Trade City1 (Algus and Delita talk)"),
    event(0x0024, true, "Dorter Trade City1 (Victory)"),
    event(0x0025, false, "Interrogation (Setup)"),
    event(0x0026, true, "Interrogation"),
    event(0x0027, false, "Sand Rat Cellar (Setup)"),
    event(0x0028, true, "Sand Rat Cellar"),
    event(0x0029, true, "Sand Rat Cellar (Victory)"),
    event(0x002A, false, "Gustav vs. Wiegraf (Setup)"),
    event(0x002B, true, "Gustav vs. Wiegraf"),
    event(0x002C, false, "Larg's Praise (Setup)"),
    event(0x002D, true, "Larg's Praise"),
    event(0x002E, false, "Miluda1 (Setup)"),
    event(0x002F, true, "Miluda1"),
    event(0x0030, true, "Miluda1 (Miluda and Algus arguing)"),
    event(0x0031, true, "Miluda1 (Delita talking)"),
    event(0x0032, true, "Miluda1 (Victory)"),
    event(0x0033, false, "Releasing Miluda (Setup)"),
    event(0x0034, true, "Releasing Miluda"),
    event(0x0035, false, "Attack on the Beoulves (Setup)"),
    event(0x0036, true, "Attack on the Beoulves"),
    event(0x0037, false, "Meeting with bedridden Dycedarg (Setup)"),
    event(0x0038, true, "Meeting with bedridden Dycedarg"),
    event(0x0039, false, "Expelling Algus (Setup)"),
    event(0x003A, true, "Expelling Algus"),
    event(0x003B, false, "Reed Whistle (Setup)"),
    event(0x003C, true, "Reed Whistle"),
    event(0x003D, false, "Miluda2 (Setup)"),
    event(0x003E, true, "Miluda2"),
    event(0x003F, true, "Miluda2 (Delita talking with Miluda)"),
    event(0x0040, true, "Miluda2 (Miluda half HP)"),
    event(0x0041, true, "Miluda2 (Ramza debating with Miluda)"),
    event(0x0042, true, "Miluda2 (Ramza pleading with Miluda)"),
    event(0x0043, true, "Miluda2 (Miluda's Death)"),
    event(0x0044, false, "Wiegraf berating Golagros (Setup)"),
    event(0x0045, true, "Wiegraf berating Golagros"),
    event(0x0046, false, "Wiegraf1 (Setup)"),
    event(0x0047, true, "Wiegraf1"),
    event(0x0048, true, "Wiegraf1 (Delita, Ramza, Wiegraf talk)"),
    event(0x0049, true, "Wiegraf1 (Ramza and Wiegraf debate)"),
    event(0x004A, true, "Wiegraf1 (Ramza and Wiegraf talk)"),
    event(0x004B, true, "Wiegraf1 (Victory)"),
    event(0x004C, false, "Finding Teta Missing (Setup)"),
    event(0x004D, true, "Finding Teta Missing"),
    event(0x004E, false, "Fort Zeakden (Setup)"),
    event(0x004F, true, "Fort Zeakden"),
    event(0x0050, true, "Fort Zeakden (Algus, Ramza round 1)"),
    event(0x0051, true, "Fort Zeakden (Algus, Ramza round 2)"),
    event(0x0052, true, "Fort Zeakden (Algus, Ramza round 3)"),
    event(0x0053, true, "Fort Zeakden (Destroy Chosen at Mandalia)"),
    event(0x0054, true, "Fort Zeakden (Save Chosen at Mandalia)"),
    event(0x0055, true, "Fort Zeakden (Delita's First Turn)"),
    event(0x0056, true, "Fort Zeakden (Algus, Delita round 1)"),
    event(0x0057, true, "Fort Zeakden (Ramza, Delita talking)"),
    event(0x0058, true, "Fort Zeakden (Victory)"),
    event(0x0059, false, "Partings (Setup)"),
    event(0x005A, true, "Partings"),
    event(0x005B, false, "Deep Dungeon NOGIAS (Setup)"),
    event(0x005C, false, "Deep Dungeon NOGIAS (Battle)"),
    event(0x005D, true, "Deep Dungeon Panel Found"),
    event(0x005E, false, "Deep Dungeon (Victory - Used for all Floors)"),
    event(0x005F, false, "Deep Dungeon TERMINATE(Setup)"),
    event(0x0060, false, "Deep Dungeon TERMINATE (Battle)"),
    event(0x0061, false, "Deep Dungeon DELTA (Setup)"),
    event(0x0062, false, "Deep Dungeon DELTA (Battle)"),
    event(0x0063, false, "Deep Dungeon VALKYRIES (Setup)"),
    event(0x0064, false, "Deep Dungeon VALKYRIES (Battle)"),
    event(0x0065, false, "Deep Dungeon MLAPAN (Setup)"),
    event(0x0066, false, "Deep Dungeon MLAPAN (Battle)"),
    event(0x0067, false, "Deep Dungeon TIGER (Setup)"),
    event(0x0068, false, "Deep Dungeon TIGER (Battle)"),
    event(0x0069, false, "Deep Dungeon BRIDGE (Setup)"),
    event(0x006A, false, "Deep Dungeon BRIDGE (Battle)"),
    event(0x006B, false, "Deep Dungeon VOYAGE (Setup)"),
    event(0x006C, false, "Deep Dungeon VOYAGE (Battle)"),
    event(0x006D, false, "Deep Dungeon HORROR (Setup)"),
    event(0x006E, false, "Deep Dungeon HORROR (Battle)"),
    event(0x006F, false, "Elidibs (Setup)"),
    event(0x0070, true, "Elidibs"),
    event(0x0071, true, "Elidibs (Victory)"),
    event(0x0072, false, "Deep Dungeon END (Setup)"),
    event(0x0073, false, "Deep Dungeon END (Battle)"),
    event(0x0074, false, "Chapter 2 Start (Setup)"),
    event(0x0075, true, "Chapter 2 Start"),
    event(0x0076, false, "Dorter2 (Setup)"),
    event(0x0077, true, "Dorter2"),
    event(0x0078, true, "Dorter2 (Victory)"),
    event(0x0079, false, "Araguay Woods (Setup)"),
    event(0x007A, true, "Araguay Woods (Options Given)"),
    event(0x007B, true, "Araguay Woods (Kill Enemies Chosen)"),
    event(0x007C, true, "Araguay Woods (Save Boco Chosen)"),
    event(0x007D, true, "Araguay Woods (Boco KO'd, Kill Enemies Chosen)"),
    event(0x007E, true, "Araguay Woods (Boco KO'd, Save Boco Chosen)"),
    event(0x007F, true, "Araguay Woods (Victory)"),
    event(0x0080, false, "Zirekile Falls (Setup)"),
    event(0x0081, true, "Zirekile Falls"),
    event(0x0082, true, "Zirekile Falls (Gafgarion and Agrias talk)"),
    event(0x0083, true, "Zirekile Falls (Gafgarion, Ramza, Delita, talk)"),
    event(0x0084, true, "Zirekile Falls (Delita, Ovelia talk)"),
    event(0x0085, true, "Zirekile Falls (Ovelia's Death)"),
    event(0x0086, true, "Zirekile Falls (Gafgarion and Ramza arguing)"),
    event(0x0087, true, "Zirekile Falls (Gafgarion retreat)"),
    event(0x0088, false, "Zirekile Falls (Victory)"),
    event(0x0089, false, "Ovelia Joins (Setup)"),
    event(0x008A, true, "Ovelia Joins"),
    event(0x008B, false, "Zalamd Fort City (Setup)"),
    event(0x008C, true, "Zaland Fort City (Options Given)"),
    event(0x008D, true, "Zaland Fort City (Kill Enemies Chosen)"),
    event(0x008E, true, "Zaland Fort City (Save Mustadio Chosen)"),
    event(0x008F, true, "Zaland Fort City (Mustadio KO'd, Kill Chosen)"),
    event(0x0090, true, "Zaland Fort City (Mustadio KO'd, Save Chosen)"),
    event(0x0091, true, "Zaland Fort City (Victory)"),
    event(0x0092, false, "Ramza, Mustadio, Agrias and Ovelia meeting (Setup)"),
    event(0x0093, true, "Ramza, Mustadio, Agrias and Ovelia meeting"),
    event(0x0094, false, "Ruins of Zaland (Setup)"),
    event(0x0095, true, "Ruins of Zaland"),
    event(0x0096, false, "Bariaus Hill (Setup)"),
    event(0x0097, true, "Bariaus Hill"),
    event(0x0098, true, "Bariaus Hill (Victory)"),
    event(0x0099, false, "Dycedarg and Gafgarion Reunion (Setup)"),
    event(0x009A, true, "Dycedarg and Gafgarion Reunion"),
    event(0x009B, false, "Gate of Lionel Castle (Setup)"),
    event(0x009C, true, "Gate of Lionel Castle"),
    event(0x009D, false, "Meeting with Draclay (Setup)"),
    event(0x009E, true, "Meeting with Draclau"),
    event(0x009F, false, "Besrodio Kidnapped (Setup)"),
    event(0x00A0, true, "Besrodio Kidnapped"),
    event(0x00A1, false, "Zigolis Swamp (Setup)"),
    event(0x00A2, true, "Zigolis Swamp"),
    event(0x00A3, true, "Zigolis Swamp (Victory)"),
    event(0x00A4, false, "Goug Machine City Town (Setup)"),
    event(0x00A5, true, "Goug Machine City Town"),
    event(0x00A6, false, "Goug Machine City (Setup)"),
    event(0x00A7, true, "Goug Machine City"),
    event(0x00A8, true, "Goug Machine City (Victory)"),
    event(0x00A9, false, "Besrodio Saved (Setup)"),
    event(0x00AA, true, "Besrodio Saved"),
    event(0x00AB, false, "Warjilis Port (Setup)"),
    event(0x00AC, true, "Warjilis Port"),
    event(0x00AD, false, "Draclau hires Gafgarion (Setup)"),
    event(0x00AE, true, "Draclau hires Gafgarion"),
    event(0x00AF, false, "Bariaus Valley (Setup)"),
    event(0x00B0, true, "Bariaus Valley"),
    event(0x00B1, true, "Bariaus Valley (Agrias and Ramza talk)"),
    event(0x00B2, true, "Bariaus Valley (Agrias Death)"),
    event(0x00B3, true, "Bariaus Valley (Victory)"),
    event(0x00B4, false, "Golgorand Execution Site (Setup)"),
    event(0x00B5, true, "Golgorand Execution Site"),
    event(0x00B6, true, "Golgorand Execution Site (Gafgarion and Agrias talk)"),
    event(0x00B7, true, "Golgorand Execution Site (Gafgarion and Ramza talk first part)"),
    event(0x00B8, true, "Golgorand Execution Site (Gafgarion and Ramza talk second part)"),
    event(0x00B9, true, "Golgorand Execution Site (Gafgarion and Ramza talk third part)"),
    event(0x00BA, true, "Golgorand Execution Site (Gafgarion, Agrias and Ramza talk)"),
    event(0x00BB, true, "Golgorand Execution Site (Gafgarion retreats)"),
    event(0x00BC, true, "Golgorand Execution Site (Victory)"),
    event(0x00BD, false, "Substitute (Setup)"),
    event(0x00BE, true, "Substitute"),
    event(0x00BF, false, "Lionel Castle Gate (Setup)"),
    event(0x00C0, true, "Lionel Castle Gate"),
    event(0x00C1, true, "Lionel Castle Gate (Ramza opens the gate)"),
    event(0x00C2, true, "Lionel Castle Gate (Gafgarion Death)"),
    event(0x00C3, true, "Lionel Castle Gate (Victory)"),
    event(0x00C4, false, "Inside of Lionel Castle (Setup)"),
    event(0x00C5, true, "Inside of Lionel Castle"),
    event(0x00C6, true, "Inside of Lionel Castle (Queklain and Ramza talk)"),
    event(0x00C7, true, "Inside of Lionel Castle (Victory)"),
    event(0x00C8, false, "The Lion War Outbreak (Setup)"),
    event(0x00C9, true, "The Lion War Outbreak"),
    event(0x00CA, false, "Chapter 3 Start (Setup)"),
    event(0x00CB, true, "Chapter 3 Start"),
    event(0x00CC, false, "Goland Coal City (Setup)"),
    event(0x00CD, true, "Goland Coal City"),
    event(0x00CE, true, "Goland Coal City (Olan Death)"),
    event(0x00CF, false, "Goland Coal City (Victory)"),
    event(0x00D0, false, "Goland Coal City post battle (setup)"),
    event(0x00D1, true, "Goland Coal City post battle"),
    event(0x00D2, false, "Steel Ball Found! (Setup)"),
    event(0x00D3, true, "Steel Ball Found!"),
    event(0x00D4, false, "Worker 8 Activated (setup)"),
    event(0x00D5, true, "Worker 8 Activated"),
    event(0x00D6, false, "Summoning Machine Found! (Setup)"),
    event(0x00D7, true, "Summoning Machine Found!"),
    event(0x00D8, false, "Cloud Summoned (Setup)"),
    event(0x00D9, true, "Cloud Summoned"),
    event(0x00DA, false, "Zarghidas (Setup)"),
    event(0x00DB, true, "Zarghidas"),
    event(0x00DC, true, "Zarghidas (Cloud freaking out)"),
    event(0x00DD, true, "Zarghidas (Cloud Death)"),
    event(0x00DE, true, "Zarghidas (Victory)"),
    event(0x00DF, false, "Talk with Zalbag in Lesalia (Setup)"),
    event(0x00E0, true, "Talk with Zalbag in Lesalia"),
    event(0x00E1, false, "Outside Castle Gate in Lesalia Zalmo 1 (Setup)"),
    event(0x00E2, true, "Outside Castle Gate in Lesalia Zalmo 1"),
    event(0x00E3, true, "Outside Castle Gate in Lesalia Zalmo 1 (Zalmo and Ramza talk)"),
    event(0x00E4, true, "Outside Castle Gate in Lesalia Zalmo 1 (Alma and Ramza talk)"),
    event(0x00E5, true, "Outside Castle Gate in Lesalia Zalmo 1 (Victory)"),
    event(0x00E6, false, "Outside Castle Gate in Lesalia Talk with Alma (Setup)"),
    event(0x00E7, true, "Outside Castle Gate in Lesalia Talk with Alma"),
    event(0x00E8, false, "Orbonne Monastery (Setup)"),
    event(0x00E9, true, "Orbonne Monastery"),
    event(0x00EA, false, "Underground Book Storage Second Floor (Setup)"),
    event(0x00EB, true, "Underground Book Storage Second Floor"),
    event(0x00EC, true, "Underground Book Storage Second Floor (Victory)"),
    event(0x00ED, false, "Underground Book Storage Third Floor (Setup)"),
    event(0x00EE, true, "Underground Book Storage Third Floor"),
    event(0x00EF, true, "Underground Book Storage Third Floor (Izlude, Ramza talk first)"),
    event(0x00F0, true, "Underground Book Storage Third Floor (Izlude, Ramza talk second)"),
    event(0x00F1, true, "Underground Book Storage Third Floor (Victory)"),
    event(0x00F2, false, "Underground Book Storage First Floor (Setup)"),
    event(0x00F3, true, "Underground Book Storage First Floor"),
    event(0x00F4, true, "Underground Book Storage First Floor (Wiegraf talk)"),
    event(0x00F5, true, "Underground Book Storage First Floor (Wiegraf, Ramza talk first)"),
    event(0x00F6, true, "Underground Book Storage First Floor (Wiegraf, Ramza talk second)"),
    event(0x00F7, true, "Underground Book Storage First Floor (Victory)"),
    event(0x00F8, false, "Meet Velius (Setup)"),
    event(0x00F9, true, "Meet Velius"),
    event(0x00FA, false, "Malak and the Scriptures (Setup)"),
    event(0x00FB, true, "Malak and the Scriptures (Options Given)"),
    event(0x00FC, true, "Malak and the Scriptures (Yes Chosen)"),
    event(0x00FD, true, "Malak and the Scriptures (No Chosen)"),
    event(0x00FE, false, "Delita swears allegiance to Ovelia (Setup)"),
    event(0x00FF, true, "Delita swears allegiance to Ovelia"),
    event(0x0100, false, "Grog Hill (Setup)"),
    event(0x0101, true, "Grog Hill"),
    event(0x0102, true, "Grog Hill (Victory)"),
    event(0x0103, false, "Meet Again with Olan (Setup)"),
    event(0x0104, true, "Meet again with Olan"),
    event(0x0105, false, "Rescue Rafa (Setup)"),
    event(0x0106, true, "Rescue Rafa"),
    event(0x0107, true, "Rescue Rafa (Malak and Ramza talk)"),
    event(0x0108, true, "Rescue Rafa (Malak, Ninja and Ramza talk)"),
    event(0x0109, true, "Rescue Rafa (Malak Retreat)"),
    event(0x010A, true, "Rescue Rafa (Rafa Death, Malak Present)"),
    event(0x010B, true, "Rescue Rafa (Rafa Death, Malak Retreated)"),
    event(0x010C, true, "Rescue Rafa (Victory)"),
    event(0x010D, false, "Exploding Frog (Setup)"),
    event(0x010E, true, "Exploding Frog"),
    event(0x010F, false, "Yuguo Woods (Setup)"),
    event(0x0110, true, "Yuguo Woods"),
    event(0x0111, true, "Yuguo Woods (Victory)"),
    event(0x0112, false, "Barinten threatens Vormav (Setup)"),
    event(0x0113, true, "Barinten threatens Vormav"),
    event(0x0114, false, "Riovanes Castle Entrance (Setup)"),
    event(0x0115, true, "Riovanes Castle Entrance"),
    event(0x0116, true, "Riovanes Castle Entrance (Rafa, Malak and Ramza talk)"),
    event(0x0117, true, "Riovanes Castle Entrance (Malak Defeated)"),
    event(0x0118, true, "Riovanes Castle Entrance (Rafa Defeated)"),
    event(0x0119, true, "Riovanes Castle Entrance (Victory)"),
    event(0x011A, false, "Escaping Alma (Setup)"),
    event(0x011B, true, "Escaping Alma"),
    event(0x011C, false, "Inside of Riovanes Castle (Setup)"),
    event(0x011D, true, "Inside of Riovanes Castle"),
    event(0x011E, true, "Inside of Riovanes Castle (Wiegraf and Ramza talk)"),
    event(0x011F, true, "Inside of Riovanes Castle (Here comes Velius)"),
    event(0x0120, true, "Inside of Riovanes Castle (Victory)"),
    event(0x0121, false, "Ajora's vessel (Setup)"),
    event(0x0122, true, "Ajora's vessel"),
    event(0x0123, false, "Rooftop of Riovanes Castle (Setup)"),
    event(0x0124, true, "Rooftop of Riovanes Castle"),
    event(0x0125, true, "Rooftop of Riovanes Castle (Rafa Death)"),
    event(0x0126, true, "Rooftop of Riovanes Castle (Victory)"),
    event(0x0127, false, "Reviving Malak (Setup)"),
    event(0x0128, true, "Reviving Malak"),
    event(0x0129, false, "Searching for Alma (Setup)"),
    event(0x012A, true, "Searching for Alma"),
    event(0x012B, false, "Things Obtained (Setup)"),
    event(0x012C, true, "Things Obtained"),
    event(0x012D, false, "Underground Book Storage Fourth Floor (Setup)"),
    event(0x012E, true, "Underground Book Storage Fourth Floor"),
    event(0x012F, true, "Underground Book Storage Fourth Floor (Victory)"),
    event(0x0130, false, "Underground Book Storage Fifth Floor (Setup)"),
    event(0x0131, true, "Underground Book Storage Fifth Floor"),
    event(0x0132, true, "Underground Book Storage Fifth Floor (Rofel and Ramza talk)"),
    event(0x0133, true, "Underground Book Storage Fifth Floor (Victory)"),
    event(0x0134, false, "Entrance to the other world (Setup)"),
    event(0x0135, true, "Entrance to the other world"),
    event(0x0136, false, "Murond Death City (Setup)"),
    event(0x0137, true, "Murond Death City"),
    event(0x0138, true, "Murond Death City (Kletian and Ramza talk)"),
    event(0x0139, true, "Murond Death City (Victory)"),
    event(0x013A, false, "Lost Sacred Precincts (Setup)"),
    event(0x013B, true, "Lost Sacred Precincts"),
    event(0x013C, true, "Lost Sacred Precincts (Balk and Ramza talk)"),
    event(0x013D, true, "Lost Sacred Precincts (Victory)"),
    event(0x013E, false, "Graveyard of Airships (Setup)"),
    event(0x013F, true, "Graveyard of Airships"),
    event(0x0140, true, "Graveyard of Airships (Hashmalum and Ramza talk)"),
    event(0x0141, true, "Graveyard of Airships (Victory)"),
    event(0x0142, false, "Graveyard of Airships (Setup)"),
    event(0x0143, true, "Graveyard of Airships"),
    event(0x0144, true, "Graveyard of Airships (Here comes Altima 2)"),
    event(0x0145, true, "Graveyard of Airships (Victory)"),
    event(0x0146, false, "Reunion and Beyond"),
    event(0x0147, true, "Reunion and beyond"),
    event(0x0148, false, "Those Who Squirm In Darkness (Setup)"),
    event(0x0149, true, "Those Who Squirm in Darkness"),
    event(0x014A, false, "A Man with the Holy Stone (Setup)"),
    event(0x014B, true, "A Man with the Holy Stone"),
    event(0x014C, false, "Doguola Pass (Setup)"),
    event(0x014D, true, "Doguola Pass"),
    event(0x014E, false, "Doguola Pass (Victory)"),
    event(0x014F, false, "Bervenia Free City (Setup)"),
    event(0x0150, true, "Bervenia Free City"),
    event(0x0151, true, "Bervenia Free City (Meliadoul and Ramza talk first part)"),
    event(0x0152, true, "Bervenia Free City (Meliadoul and Ramza talk second part)"),
    event(0x0153, true, "Bervenia Free City (Meliadoul and Ramza talk third part)"),
    event(0x0154, true, "Bervenia Free City (Victory)"),
    event(0x0155, false, "Finath River (Setup)"),
    event(0x0156, true, "Finath River"),
    event(0x0157, false, "Finath River (Victory)"),
    event(0x0158, false, "Delita's Thoughts (Setup)"),
    event(0x0159, true, "Delita's Thoughts"),
    event(0x015A, false, "Zalmo II (Setup)"),
    event(0x015B, true, "Zalmo II"),
    event(0x015C, true, "Zalmo II (Zalmo and Delita talk)"),
    event(0x015D, true, "Zalmo II (Zalmo and Ramza talk)"),
    event(0x015E, true, "Zalmo II (Victory)"),
    event(0x015F, false, "Unstoppable Cog (Setup)"),
    event(0x0160, true, "Unstoppable Cog"),
    event(0x0161, false, "Balk I (Setup)"),
    event(0x0162, true, "Balk I"),
    event(0x0163, true, "Balk I (Balk and Ramza talk)"),
    event(0x0164, true, "Balk I (Victory)"),
    event(0x0165, false, "Seized T"),
    event(0x0166, true, "Seized T"),
    event(0x0167, false, "South Wall of Bethla Garrison (Setup)"),
    event(0x0168, true, "South Wall of Bethla Garrison"),
    event(0x0169, true, "South Wall of Bethla Garrison (Victory)"),
    event(0x016A, false, "North Wall of Bethla Garrison (Setup)"),
    event(0x016B, true, "North Wall of Bethla Garrison"),
    event(0x016C, true, "North Wall of Bethla Garrison (Victory)"),
    event(0x016D, false, "Assassination of Prince Larg (Setup)"),
    event(0x016E, true, "Assassination of Prince Larg"),
    event(0x016F, false, "Bethla Sluice (Setup)"),
    event(0x0170, true, "Bethla Sluice"),
    event(0x0171, true, "Bethla Sluice (First lever left)"),
    event(0x0172, true, "Bethla Sluice (Second lever left)"),
    event(0x0173, true, "Bethla Sluice (First lever right)"),
    event(0x0174, true, "Bethla Sluice (Second lever right)"),
    event(0x0175, false, "Rescue of Cid (Setup)"),
    event(0x0176, true, "Rescue of Cid"),
    event(0x0177, false, "Prince Goltana's Final Moments (Setup)"),
    event(0x0178, true, "Prince Goltana's Final Moments"),
    event(0x0179, false, "Germinas Peak (Setup)"),
    event(0x017A, true, "Germinas Peak"),
    event(0x017B, true, "Germinas Peak (Victory)"),
    event(0x017C, false, "Poeskas Lake (Setup)"),
    event(0x017D, true, "Poeskas Lake"),
    event(0x017E, false, "Poeskas Lake (Victory)"),
    event(0x017F, false, "Ambition of Dycedarg (Setup)"),
    event(0x0180, true, "Ambition of Dycedarg"),
    event(0x0181, false, "Outside of Limberry Castle (Setup)"),
    event(0x0182, true, "Outside of Limberry Castle"),
    event(0x0183, true, "Outside of Limberry Castle (Victory)"),
    event(0x0184, false, "Men of Odd Appearance (Setup)"),
    event(0x0185, true, "Men of Odd Appearance"),
    event(0x0186, false, "Elmdor II (Setup)"),
    event(0x0187, true, "Elmdor II"),
    event(0x0188, true, "Elmdor II (Ultima Demon Celia)"),
    event(0x0189, true, "Elmdor II (Ultima Demon Lede)"),
    event(0x018A, true, "Elmdor II (Victory)"),
    event(0x018B, false, "Zalera (Setup)"),
    event(0x018C, true, "Zalera"),
    event(0x018D, true, "Zalera (Zalera, Meliadoul and Ramza talk)"),
    event(0x018E, true, "Zalera (Meliadoul and Ramza talk)"),
    event(0x018F, true, "Zalera (Victory)"),
    event(0x0190, false, "Random Battle Template (Setup)"),
    event(0x0191, false, "Random Battle Template (Initiate)"),
    event(0x0192, false, "Random Battle Template (Victory)"),
    event(0x0193, false, "Empty"),
    event(0x0194, false, "Game Over Event (Plays automatically upon Game Over)"),
    event(0x0195, false, "Empty"),
    event(0x0196, false, "Empty"),
    event(0x0197, false, "Empty"),
    event(0x0198, false, "Empty"),
    event(0x0199, false, "Empty"),
    event(0x019A, false, "Tutorial - (Battlefield Control) (Setup)"),
    event(0x019B, true, "Tutorial - (Battlefield Control)"),
    event(0x019C, false, "Tutorial - (Battle) (Setup)"),
    event(0x019D, true, "Tutorial - (Battle)"),
    event(0x019E, false, "Tutorial - (Move and Act) (Setup)"),
    event(0x019F, true, "Tutorial - (Move and Act)"),
    event(0x01A0, false, "Tutorial - (Charge Time Battle) (Setup)"),
    event(0x01A1, true, "Tutorial - (Charge Time Battle)"),
    event(0x01A2, false, "Tutorial - (How to Cast Spells) (Setup)"),
    event(0x01A3, true, "Tutorial - (How to Cast Spells)"),
    event(0x01A4, false, "Tutorial - (Abnormal Status) (Setup)"),
    event(0x01A5, true, "Tutorial - (Abnormal Status)"),
    event(0x01A6, false, "Tutorial - (On-Line Help) (Setup)"),
    event(0x01A7, true, "Tutorial - (On-Line Help)"),
    event(0x01A8, false, "Tutorial - (Options) (Setup)"),
    event(0x01A9, true, "Tutorial - (Options)"),
    event(0x01AA, false, "The Mystery of Lucavi (Setup)"),
    event(0x01AB, true, "The Mystery of Lucavi"),
    event(0x01AC, false, "Delita's Betrayal (Setup)"),
    event(0x01AD, true, "Delita's Betrayal"),
    event(0x01AE, true, "Delita's Betrayal"),
    event(0x01AF, false, "Mosfungus (Setup)"),
    event(0x01B0, true, "Mosfungus"),
    event(0x01B1, false, "At the Gate of the Beoulve Castle (Setup)"),
    event(0x01B2, true, "At the Gate of the Beoulve Castle"),
    event(0x01B3, false, "Adramelk (Setup)"),
    event(0x01B4, true, "Adramelk"),
    event(0x01B5, true, "Adramelk (Zalbag and Ramza talk)"),
    event(0x01B6, true, "Adramelk (Dycedarg and Zalbag talk)"),
    event(0x01B7, true, "Adramelk (Here comes Adramelk)"),
    event(0x01B8, true, "Adramelk (Victory)"),
    event(0x01B9, false, "Funeral's Final Moments (Setup)"),
    event(0x01BA, true, "Funeral's Final Moments"),
    event(0x01BB, false, "St. Murond Temple (Setup)"),
    event(0x01BC, true, "St. Murond Temple"),
    event(0x01BD, true, "St. Murond Temple (Victory)"),
    event(0x01BE, false, "Hall of St. Murond Temple (Setup)"),
    event(0x01BF, true, "Hall of St. Murond Temple"),
    event(0x01C0, true, "Hall of St. Murond Temple (Vormav and Meliadoul talk)"),
    event(0x01C1, true, "Hall of St. Murond Temple (Vormav and Ramza talk)"),
    event(0x01C2, true, "Hall of St. Murond Temple (Victory)"),
    event(0x01C3, false, "Chapel of St. Murond Temple (Setup)"),
    event(0x01C4, true, "Chapel of St. Murond Temple"),
    event(0x01C5, true, "Chapel of St. Murond Temple (Zalbag, Ramza first turn)"),
    event(0x01C6, true, "Chapel of St. Murond Temple (Ramza, Zalbag 50% HP talk)"),
    event(0x01C7, true, "Chapel of St. Murond Temple (Victory)"),
    event(0x01C8, false, "Requiem (Setup)"),
    event(0x01C9, true, "Requiem"),
    event(0x01CA, false, "Zarghidas (Setup)"),
    event(0x01CB, true, "Zarghidas (Options Given)"),
    event(0x01CC, true, "Zarghidas (Don't Buy Flower Chosen)"),
    event(0x01CD, true, "Zarghidas (Buy Flower Chosen)"),
    event(0x01CE, false, "Bar - Deep Dungeon (Setup)"),
    event(0x01CF, true, "Bar - Deep Dungeon"),
    event(0x01D0, false, "Bar - Goland Coal City (Setup)"),
    event(0x01D1, true, "Bar - Goland Coal City (Options Given)"),
    event(0x01D2, true, "Bar - Goland Coal City (Refuse Beowulf's Invitation Chosen)"),
    event(0x01D3, true, "Bar - Goland Coal City (Accept Beowulf's invitation Chosen)"),
    event(0x01D4, false, "Colliery Underground - Third Floor (Setup)"),
    event(0x01D5, false, "Colliery Underground - Third Floor (Battle)"),
    event(0x01D6, false, "Colliery Underground - Third Floor (Victory)"),
    event(0x01D7, false, "Colliery Underground - Second Floor (Setup)"),
    event(0x01D8, false, "Colliery Underground - Second Floor (Battle)"),
    event(0x01D9, false, "Colliery Underground - Second Floor (Victory)"),
    event(0x01DA, false, "Colliery Underground - First Floor (Setup)"),
    event(0x01DB, false, "Colliery Underground - First Floor (Battle)"),
    event(0x01DC, false, "Colliery Underground - First Floor (Victory)"),
    event(0x01DD, false, "Underground Passage in Goland (Setup)"),
    event(0x01DE, true, "Underground Passage in Goland (Battle)"),
    event(0x01DF, true, "Underground Passage in Goland (Reis's Death, Beowulf Alive)"),
    event(0x01E0, false, "Underground Passage in Goland (Reis's Death, Beowulf KO'd)"),
    event(0x01E1, false, "Underground Passage in Goland (Victory)"),
    event(0x01E2, false, "Underground Passage in Goland (Setup)"),
    event(0x01E3, true, "Underground Passage in Goland (Post-Battle)"),
    event(0x01E4, false, "Nelveska Temple (Setup)"),
    event(0x01E5, true, "Nelveska Temple"),
    event(0x01E6, true, "Nelveska Temple (Worker 7 recharging)"),
    event(0x01E7, true, "Nelveska Temple (Victory)"),
    event(0x01E8, false, "Reis Curse (Setup)"),
    event(0x01E9, true, "Reis Curse"),
    event(0x01EA, true, "Bethla Sluice (Late add-in Ramza hint)"),
    event(0x01EB, false, "Empty"),
    event(0x01EC, false, "Empty"),
    event(0x01ED, false, "Empty"),
    event(0x01EE, false, "Empty"),
    event(0x01EF, false, "Empty"),
    event(0x01F0, false, "Empty"),
    event(0x01F1, false, "Empty"),
    event(0x01F2, false, "Empty"),
    event(0x01F3, false, "Empty"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_slots() {
        for (index, event) in EVENT_NAMES.iter().enumerate() {
            assert_eq!(usize::from(event.id), index);
        }
    }

    #[test]
    fn lookup() {
        let prayer = event_descriptor(2).unwrap();
        assert_eq!(prayer.name, "Orbonne Prayer");
        assert!(prayer.usable);
        assert!(!event_descriptor(0).unwrap().usable);
        assert!(event_descriptor(500).is_none());
    }
}
