//! The manual category table.
//!
//! Order is priority: a frame matching patterns of several rules belongs to
//! the earliest one. Some patterns intentionally appear in more than one rule
//! (`QuestMap`, `Arena`, `ActionBar`, ...); only the first occurrence is ever
//! effective.

use crate::types::CategoryRule;

/// Manual rules in priority order
pub static MANUAL_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "chat",
        patterns: &[
            "Chat", "Whisper", "Channel", "Say", "VoiceChat", "TextToSpeech", "Emote", "BN",
            "Conversation", "QuickJoin", "VoiceActivity",
        ],
        description: "Chat panels, communication controls, and related voice or text UI.",
    },
    CategoryRule {
        name: "map",
        patterns: &[
            "WorldMap", "Minimap", "Map", "ZoneText", "Waypoint", "FlightMap",
            "BattlefieldMap", "QuestMap", "Navigation", "ScenarioQueueFrame", "AreaPOI",
            "ZoneAbility",
        ],
        description: "World map, minimap, and navigation related frames and helpers.",
    },
    CategoryRule {
        name: "mail",
        patterns: &[
            "Mail", "SendMail", "Inbox", "OpenMail", "MailFrame", "MailItem", "Postmaster",
            "Postal",
        ],
        description: "Mailbox interaction, send mail UI, and attachment handling.",
    },
    CategoryRule {
        name: "tooltip",
        patterns: &[
            "GameTooltip", "ItemRefTooltip", "ShoppingTooltip", "EmbeddedItemTooltip",
            "Tooltip", "CompareTooltip", "Hover", "AuraTooltip", "NamePlateTooltip",
            "FloatingBattlePetTooltip", "BattlePetTooltip", "WorldMapTooltip",
            "ItemSocketingTooltip",
        ],
        description: "Tooltip overlays and comparison tooltip helpers.",
    },
    CategoryRule {
        name: "unitframes",
        patterns: &[
            "PlayerFrame", "TargetFrame", "FocusFrame", "PartyFrame", "PartyMember", "Raid",
            "CompactRaid", "CompactUnit", "Boss", "Arena", "PetFrame", "PetAction",
            "Vehicle", "HealthBar", "ManaBar", "StatusBar", "PowerBar", "Rune", "Totem",
            "MirrorTimer", "Combo", "ClassPower", "MainTank", "MainAssist", "NamePlate",
            "AlternatePower", "MonkHarmony", "SoulShard", "TotemFrame", "RuneFrame",
            "BossTargetFrame", "ArenaPrepFrame", "PlayerPowerBar", "PaladinPowerBar",
            "PriestBar", "ShardBar", "BurningEmbers",
        ],
        description: "Unit frames for players, parties, raids, bosses, and their resources.",
    },
    CategoryRule {
        name: "castbars",
        patterns: &[
            "CastingBar", "CastBar", "CastTimer", "SpellQueue", "Latency", "ChannelBar",
            "SpellProgress", "CastingTimer",
        ],
        description: "Cast bar overlays, spell progress indicators, and latency readouts.",
    },
    CategoryRule {
        name: "actionbars",
        patterns: &[
            "ActionBar", "ActionButton", "MultiBar", "MultiCast", "StanceButton",
            "PetActionButton", "OverrideActionBar", "PossessButton", "VehicleMenuBar",
            "MicroButtonAndBagsBar", "MainMenuBar", "BonusActionBar", "PetBattleActionBar",
            "StatusTrackingBar", "TempEnchant",
        ],
        description: "Action bar layouts, stance bars, and vehicle/override controls.",
    },
    CategoryRule {
        name: "combatlog",
        patterns: &[
            "CombatLog", "CombatText", "ScrollingCombatText", "CombatConfig", "DamageTaken",
            "EventParser", "MissType", "LogScroll", "DeathRecap",
        ],
        description: "Combat log panels, parsing helpers, and scrolling combat text widgets.",
    },
    CategoryRule {
        name: "config",
        patterns: &[
            "InterfaceOptions", "VideoOptions", "AudioOptions", "Options", "Settings",
            "Slider", "CheckButton", "ColorPicker", "SavedVariable", "Preference",
            "Binding", "KeyBinding", "MacroOptions", "Profile", "UIPanelOptions", "Addon",
        ],
        description: "Configuration panels, settings sliders, and persistent profile helpers.",
    },
    CategoryRule {
        name: "debug",
        patterns: &[
            "Debug", "DevTools", "Error", "Bug", "Trace", "EventTrace", "ScriptErrors",
        ],
        description: "Developer tooling, debug overlays, error handlers, and trace logs.",
    },
    CategoryRule {
        name: "inventory",
        patterns: &[
            "ContainerFrame", "Bag", "BankFrame", "ReagentBank", "Backpack", "Inventory",
            "CharacterBag", "ItemButton", "ItemSlot", "EquipmentManager", "PaperDoll",
            "EquipmentFlyout", "Wardrobe", "Heirlooms",
        ],
        description: "Inventory, bag, bank, and equipment management frames.",
    },
    CategoryRule {
        name: "character",
        patterns: &[
            "CharacterFrame", "Character", "Inspect", "PaperDollFrame", "ReputationFrame",
            "TokenFrame", "ArtifactFrame", "Transmogrify", "Soulbind", "Covenant",
        ],
        description: "Character sheet, inspection, reputation, and covenant panels.",
    },
    CategoryRule {
        name: "quests",
        patterns: &[
            "Quest", "Campaign", "AdventureJournal", "QuestLog", "QuestMap", "QuestFrame",
            "QuestTimer", "QuestPOI", "QuestChoice", "WatchFrame",
        ],
        description: "Quest log panels, campaign trackers, and quest reward dialogs.",
    },
    CategoryRule {
        name: "guild",
        patterns: &[
            "Guild", "GuildControl", "GuildBank", "GuildFrame", "GuildRoster",
            "CommunitiesGuild", "CommunitiesFrame", "Petition",
        ],
        description: "Guild roster, bank, and rank management frames.",
    },
    CategoryRule {
        name: "friends",
        patterns: &[
            "Friends", "QuickJoin", "BattleTagInvite", "RecruitAFriend", "AddFriend",
            "WhoFrame",
        ],
        description: "Friends list, quick-join, and recruit-a-friend panels.",
    },
    CategoryRule {
        name: "achievements",
        patterns: &[
            "Achievement", "Criteria", "Comparison",
        ],
        description: "Achievement summary, progress, and comparison frames.",
    },
    CategoryRule {
        name: "pvp",
        patterns: &[
            "PVP", "Honor", "Conquest", "Arena", "WarGame", "WorldState", "Battleground",
            "PvP",
        ],
        description: "PvP scoreboards, honor/conquest panels, and battleground status.",
    },
    CategoryRule {
        name: "professions",
        patterns: &[
            "TradeSkill", "Craft", "Profession", "PrimaryProfession", "SecondaryProfession",
            "Archaeology", "BlackMarket",
        ],
        description: "Profession craft windows, archaeology, and related trade skills.",
    },
    CategoryRule {
        name: "lfg",
        patterns: &[
            "LFG", "LFD", "LFR", "RaidFinder", "GroupFinder", "QueueStatus",
            "ScenarioQueue", "PremadeGroups", "DungeonReadyDialog", "PVEFrame",
        ],
        description: "Looking-for-group tools, dungeon/raid finder panels, and queue dialogs.",
    },
    CategoryRule {
        name: "talents",
        patterns: &[
            "Talent", "Specialization", "PvpTalent", "PetTalent", "Glyph", "ClassTalent",
        ],
        description: "Talent trees, specialization pickers, and glyph panels.",
    },
    CategoryRule {
        name: "spellbook",
        patterns: &[
            "SpellBook", "Spellbook", "SpellFlyout", "SpellBookFrame", "SpellBookSkillLine",
        ],
        description: "Spellbook tabs, flyouts, and skill line frames.",
    },
    CategoryRule {
        name: "auction",
        patterns: &[
            "Auction", "AuctionHouse",
        ],
        description: "Auction house search, listings, and sell tabs.",
    },
    CategoryRule {
        name: "trade",
        patterns: &[
            "TradeFrame", "TradePlayer", "TradeRecipient", "TradeSkillMaster",
        ],
        description: "Trade window slots and trade partner inventory displays.",
    },
    CategoryRule {
        name: "merchant",
        patterns: &[
            "Merchant", "Vendor",
        ],
        description: "Merchant interaction panes and vendor buy/sell controls.",
    },
    CategoryRule {
        name: "pets",
        patterns: &[
            "PetJournal", "PetStable", "PetBattle", "MountJournal", "ToyBox", "Heirloom",
        ],
        description: "Collections journal entries for pets, mounts, toys, and pet battles.",
    },
    CategoryRule {
        name: "loot",
        patterns: &[
            "GroupLoot", "BonusRoll", "LootFrame", "LootHistory",
        ],
        description: "Loot roll frames, bonus roll dialogs, and loot history panels.",
    },
    CategoryRule {
        name: "levelup",
        patterns: &[
            "LevelUpDisplay", "PlayerChoice",
        ],
        description: "Level-up display banners and player choice reward frames.",
    },
    CategoryRule {
        name: "core",
        patterns: &[
            "UIParent", "WorldFrame", "MainMenuBar", "ActionBar", "MultiBar",
            "ExtraActionBar", "FrameStack", "ClickBinding", "EventDispatcher",
            "FrameRegistrar", "EventRouter", "SecureHandler", "Core", "UIPanel",
            "MicroButton", "VehicleMenuBar", "OverrideActionBar", "StanceBar", "PossessBar",
            "PetBattleFrame", "MainMenu", "StatusTrackingBar",
        ],
        description: "Core dispatcher frames, secure handlers, and shared UI infrastructure.",
    },
];

/// Look up a rule by category name
#[must_use]
pub fn rule_by_name(name: &str) -> Option<&'static CategoryRule> {
    MANUAL_RULES.iter().find(|rule| rule.name == name)
}
