//! Human readable labels for automatic prefix groups.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lowercase prefix key -> artifact label
static AUTO_LABEL_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("containerframe", "inventory_containers"),
        ("worldstatescorebutton", "pvp_scoreboard_buttons"),
        ("merchantitem", "merchant_items"),
        ("addonlistentry", "addon_list_entries"),
        ("pvpteamdetailsbutton", "pvp_team_details_buttons"),
        ("dropdownlist", "dropdown_lists"),
        ("boss", "boss_frames"),
        ("staticpopup", "static_popup_dialogs"),
        ("partymemberframe", "party_member_frames"),
        ("questloglistscrollframebutton", "quest_log_scroll_buttons"),
        (
            "friendsframefriendsscrollframebutton",
            "friends_list_scroll_buttons",
        ),
        ("whoframebutton", "who_frame_buttons"),
        ("bankframeitem", "bank_items"),
        ("guildframebutton", "guild_frame_buttons"),
        ("reputationbar", "reputation_bars"),
        ("guildframeguildstatusbutton", "guild_status_buttons"),
        ("characterstatspanecategory", "character_stats_categories"),
        ("pvpteam", "pvp_team_frames"),
        ("questtimer", "quest_timer_frames"),
        ("multicastactionbutton", "multicast_action_buttons"),
        ("multibarleftbutton", "multibar_left_buttons"),
        ("spellbutton", "spellbook_buttons"),
        ("multibarbottomrightbutton", "multibar_bottom_right_buttons"),
        ("actionbutton", "action_bar_buttons"),
        ("skillrankframe", "skill_rank_frames"),
        ("multibarrightbutton", "multibar_right_buttons"),
        ("openmailattachmentbutton", "open_mail_attachment_buttons"),
        ("multibarbottomleftbutton", "multibar_bottom_left_buttons"),
        ("secondaryprofession", "secondary_profession_frames"),
        ("mailitem", "mail_item_slots"),
        ("stancebutton", "stance_buttons"),
        ("petactionbutton", "pet_action_buttons"),
        ("friendsframeignorebutton", "friends_ignore_buttons"),
        ("tradeplayeritem", "trade_player_items"),
        ("traderecipientitem", "trade_recipient_items"),
        ("sendmailattachment", "send_mail_attachments"),
        ("questtitlebutton", "quest_title_buttons"),
        ("primaryprofession", "primary_profession_frames"),
        ("overrideactionbarbutton", "override_actionbar_buttons"),
        ("skilltypelabel", "skill_type_labels"),
        ("friendsfriendsbutton", "friends_of_friends_buttons"),
        ("compactraidframe", "compact_raid_frames"),
        ("tabardframecustomization", "tabard_customization_options"),
        ("rune", "rune_frames"),
        ("questprogressitem", "quest_progress_items"),
        ("partymemberbufftooltipbuff", "party_buff_tooltips"),
        (
            "compactraidframemanagerdisplayframefilteroptionsfiltergroup",
            "compact_raid_manager_filters",
        ),
        ("itemrefshoppingtooltip", "itemref_shopping_tooltips"),
        ("worldmapcomparetooltip", "world_map_compare_tooltips"),
        ("lootbutton", "loot_buttons"),
        ("shoppingtooltip", "shopping_tooltips"),
        ("petstableactivepet", "pet_stable_active_pets"),
        ("guildcontrolpopupframecheckbox", "guild_control_checkboxes"),
        ("worldstatescorecolumn", "pvp_score_columns"),
        (
            "chatconfigcategoryframebutton",
            "chat_config_category_buttons",
        ),
        ("guildbanktabpermissionstab", "guild_bank_permissions_tabs"),
        ("totemframetotem", "totem_frame_totems"),
        ("spellbookframetabbutton", "spellbook_tab_buttons"),
        ("friendstooltipgameaccount", "friends_tooltip_game_accounts"),
        (
            "guildcontroluiranksettingsframecheckbox",
            "guild_rank_settings_checkboxes",
        ),
        ("combatconfigtab", "combat_config_tabs"),
        ("petstablestabledpet", "pet_stable_stabled_pets"),
        ("tutorialframealertbutton", "tutorial_alert_buttons"),
        ("autocompletebutton", "autocomplete_buttons"),
        ("petitionframemembername", "petition_member_names"),
        ("mirrortimer", "mirror_timers"),
        ("tempenchant", "temporary_weapon_enchants"),
        ("characterbag", "character_bags"),
        (
            "embeddeditemtooltiptooltiptextleft",
            "embedded_item_tooltip_text_left",
        ),
        (
            "chatconfigcombatsettingsfiltersbutton",
            "chat_config_combat_filter_buttons",
        ),
        ("itemreftooltiptextright", "itemref_tooltip_text_right"),
        (
            "scenarioqueueframecooldownframename",
            "scenario_queue_cooldown_names",
        ),
        (
            "levelupdisplaysideunlockframe",
            "levelup_display_side_unlock_frames",
        ),
        (
            "raidfinderqueueframecooldownframestatus",
            "raidfinder_cooldown_status",
        ),
        (
            "embeddeditemtooltiptooltiptextright",
            "embedded_item_tooltip_text_right",
        ),
        ("possessbutton", "possess_buttons"),
        ("charactertrinket", "character_trinket_slots"),
        ("partymemberbufftooltipdebuff", "party_debuff_tooltips"),
        (
            "embeddeditemtooltiptextright",
            "embedded_item_tooltip_text_right_alt",
        ),
        ("gametooltiptextright", "game_tooltip_text_right"),
        ("characterfinger", "character_ring_slots"),
        (
            "compactraidframemanagerdisplayframraidmarkersraidmarker",
            "raid_marker_buttons",
        ),
        ("worldmaptooltiptextleft", "world_map_tooltip_text_left"),
        ("worldmaptooltiptextright", "world_map_tooltip_text_right"),
        (
            "embeddeditemtooltiptextleft",
            "embedded_item_tooltip_text_left",
        ),
        ("grouplootframe", "group_loot_frames"),
        ("lfdqueueframecooldownframestatus", "lfd_cooldown_status"),
        ("nameplatetooltiptextright", "nameplate_tooltip_text_right"),
        (
            "worldmaptooltiptooltiptextright",
            "world_map_tooltip_tooltip_text_right",
        ),
        (
            "scenarioqueueframecooldownframestatus",
            "scenario_queue_cooldown_status",
        ),
        ("friendsframetab", "friends_frame_tabs"),
        ("pvpframetab", "pvp_frame_tabs"),
        ("characterframetab", "character_frame_tabs"),
        ("gametooltiptextleft", "game_tooltip_text_left"),
        ("pvpbannerframecustomization", "pvp_banner_customization"),
        (
            "worldmaptooltiptooltiptextleft",
            "world_map_tooltip_tooltip_text_left",
        ),
        ("groupfinderframegroupbutton", "group_finder_group_buttons"),
        ("lfdqueueframecooldownframename", "lfd_cooldown_names"),
        ("itemreftooltiptextleft", "itemref_tooltip_text_left"),
    ])
});

/// Fallback grouping key for names without a leading letter
pub const MISC_KEY: &str = "misc";

/// Resolve the artifact label for an automatic group key.
///
/// The key is lowercased first; keys without an override map to themselves.
#[must_use]
pub fn resolve_label(key: &str) -> String {
    let normalized = key.to_lowercase();
    match AUTO_LABEL_OVERRIDES.get(normalized.as_str()) {
        Some(label) => (*label).to_string(),
        None => normalized,
    }
}
